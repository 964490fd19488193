// cartridge file access: read whole image, write repaired image back
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::header::{parse, HeaderInfo};
use super::repair::repair;

pub struct Cartridge {
    path: PathBuf,
    rom: Vec<u8>,
    info: HeaderInfo,
}

impl Cartridge {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let rom = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        debug!("read {} bytes from {}", rom.len(), path.display());

        let info = parse(&rom)?;
        Ok(Self { path, rom, info })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn info(&self) -> &HeaderInfo {
        &self.info
    }

    /// Writes the repaired image over the original file and reloads it.
    /// Returns false (and leaves the file alone) if the header is already valid.
    pub fn fix(&mut self) -> Result<bool> {
        if !self.info.needs_repair() {
            return Ok(false);
        }

        let fixed = repair(&self.rom, &self.info);
        fs::write(&self.path, &fixed)
            .with_context(|| format!("writing {}", self.path.display()))?;
        info!("repaired header written to {}", self.path.display());

        *self = Self::load(&self.path)?;
        Ok(true)
    }
}
