// header repair: rewrite logo + complement check
use log::debug;

use super::{
    header::HeaderInfo, logo::NINTENDO_LOGO, CHECKSUM_OFFSET, LOGO_END, LOGO_START, MIN_IMAGE_LEN,
};

/// Returns a copy of `image` with the canonical logo and `info`'s expected
/// checksum written in. `info` must come from parsing this same `image`.
pub fn repair(image: &[u8], info: &HeaderInfo) -> Vec<u8> {
    let mut fixed = image.to_vec();
    repair_in_place(&mut fixed, info);
    fixed
}

/// Same as [`repair`], but overwrites the caller's buffer.
///
/// Panics if `image` is shorter than the header.
pub fn repair_in_place(image: &mut [u8], info: &HeaderInfo) {
    debug_assert!(image.len() >= MIN_IMAGE_LEN, "repair on a short image");

    image[LOGO_START..LOGO_END].copy_from_slice(&NINTENDO_LOGO);
    image[CHECKSUM_OFFSET] = info.expected_checksum;

    debug!(
        "wrote logo and checksum 0x{:02X} (was 0x{:02X})",
        info.expected_checksum, info.stored_checksum
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rom::{parse, TITLE_START};
    use proptest::prelude::*;

    fn fix(image: &[u8]) -> Vec<u8> {
        repair(image, &parse(image).unwrap())
    }

    #[test]
    fn testgame_is_fixed() {
        let mut image = vec![0; MIN_IMAGE_LEN];
        image[TITLE_START..TITLE_START + 8].copy_from_slice(b"TESTGAME");

        let fixed = fix(&image);
        let info = parse(&fixed).unwrap();
        assert!(info.logo_valid);
        assert!(info.checksum_valid());
        assert_eq!(info.stored_checksum, 0x8D);
        assert_eq!(info.title, "TESTGAME");
    }

    #[test]
    fn leaves_input_untouched() {
        let image = vec![0x11; 0x200];
        let before = image.clone();
        let _ = fix(&image);
        assert_eq!(image, before);
    }

    #[test]
    fn valid_image_is_unchanged() {
        let mut image = vec![0; MIN_IMAGE_LEN];
        image[LOGO_START..LOGO_END].copy_from_slice(&NINTENDO_LOGO);
        image[CHECKSUM_OFFSET] = 0xE7;
        assert_eq!(fix(&image), image);
    }

    #[test]
    fn in_place_matches_copy() {
        let mut image: Vec<u8> = (0..0x300).map(|i| (i * 7) as u8).collect();
        let info = parse(&image).unwrap();
        let copied = repair(&image, &info);
        repair_in_place(&mut image, &info);
        assert_eq!(image, copied);
    }

    #[test]
    #[should_panic]
    fn short_image_panics() {
        let info = parse(&[0; MIN_IMAGE_LEN]).unwrap();
        let mut short = vec![0; 0x40];
        repair_in_place(&mut short, &info);
    }

    proptest! {
        #[test]
        fn repaired_image_is_valid(image in proptest::collection::vec(any::<u8>(), MIN_IMAGE_LEN..0x400)) {
            let info = parse(&fix(&image)).unwrap();
            prop_assert!(info.logo_valid);
            prop_assert!(info.checksum_valid());
            prop_assert!(!info.needs_repair());
        }

        #[test]
        fn repair_is_idempotent(image in proptest::collection::vec(any::<u8>(), MIN_IMAGE_LEN..0x400)) {
            let once = fix(&image);
            prop_assert_eq!(fix(&once), once);
        }

        #[test]
        fn only_logo_and_checksum_change(image in proptest::collection::vec(any::<u8>(), MIN_IMAGE_LEN..0x400)) {
            let fixed = fix(&image);
            prop_assert_eq!(fixed.len(), image.len());
            for (i, (a, b)) in image.iter().zip(&fixed).enumerate() {
                if !(LOGO_START..LOGO_END).contains(&i) && i != CHECKSUM_OFFSET {
                    prop_assert_eq!(a, b, "byte {:#X} changed", i);
                }
            }
        }
    }
}
