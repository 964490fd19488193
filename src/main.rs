use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;

use gbaed::rom::{self, Cartridge, ParseError};

#[derive(Parser, Debug)]
#[command(about = "GBA header examiner & debugger")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the header fields and check the logo and checksum
    Info {
        /// Path to .gba ROM file
        rom: PathBuf,
    },

    /// Rewrite the logo and checksum in place if either is bad
    Fix {
        /// Path to .gba ROM file
        rom: PathBuf,

        /// Report what would change without writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom_path = match &args.command {
        Command::Info { rom } | Command::Fix { rom, .. } => rom,
    };

    let mut cart = match Cartridge::load(rom_path) {
        Ok(cart) => cart,
        Err(e) => match load_status(&e) {
            Some(status) => {
                println!("{}", status);
                std::process::exit(1);
            }
            None => return Err(e),
        },
    };
    println!("Data loaded.");
    println!("{}", cart.info());

    match args.command {
        Command::Info { .. } => {}

        Command::Fix { dry_run: true, .. } => {
            if cart.info().needs_repair() {
                let fixed = rom::repair(cart.rom(), cart.info());
                let changed = cart.rom().iter().zip(&fixed).filter(|(a, b)| a != b).count();
                println!("Would rewrite {} byte(s) in {}", changed, cart.path().display());
            } else {
                println!("Header already valid.");
            }
        }

        Command::Fix { dry_run: false, .. } => {
            if cart.fix()? {
                info!("fixed {}", cart.path().display());
                println!("Repair succeeded");
                println!("{}", cart.info());
            } else {
                warn!("nothing to fix in {}", cart.path().display());
                println!("Header already valid.");
            }
        }
    }

    Ok(())
}

/// Status line for load failures that have a friendlier message than the error chain.
fn load_status(e: &anyhow::Error) -> Option<&'static str> {
    match e.downcast_ref::<ParseError>() {
        Some(ParseError::TooShort { .. }) => Some("ERROR: ROM is too small."),
        None => None,
    }
}
