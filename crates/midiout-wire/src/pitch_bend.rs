//! 14-bit pitch bend helpers.
//!
//! Pitch bend travels as two 7-bit data bytes, least significant first.
//! The unsigned range is 0..=16383 with 8192 meaning "no bend".

/// Unsigned center value (no bend).
pub const PITCH_BEND_CENTER: u16 = 8192;

/// Largest 14-bit value.
pub const PITCH_BEND_MAX: u16 = 0x3FFF;

/// True when `value` has no bits set above bit 13.
#[inline]
pub const fn is_valid_pitch_bend(value: u16) -> bool {
    value >> 14 == 0
}

/// Split a 14-bit value into `(lsb, msb)`. Bits above bit 13 are dropped.
#[inline]
pub const fn split_pitch_bend(value: u16) -> (u8, u8) {
    let lsb = (value & 0x7F) as u8;
    let msb = ((value >> 7) & 0x7F) as u8;
    (lsb, msb)
}

/// Rebuild the 14-bit value from its data bytes.
#[inline]
pub const fn join_pitch_bend(lsb: u8, msb: u8) -> u16 {
    ((msb as u16 & 0x7F) << 7) | (lsb as u16 & 0x7F)
}

/// Convert a signed bend (-8192 to 8191, 0 = center) to the unsigned wire value.
#[inline]
pub fn pitch_bend_from_signed(bend: i16) -> u16 {
    (bend as i32 + PITCH_BEND_CENTER as i32).clamp(0, PITCH_BEND_MAX as i32) as u16
}

/// Inverse of [`pitch_bend_from_signed`].
#[inline]
pub const fn pitch_bend_to_signed(value: u16) -> i16 {
    (value & PITCH_BEND_MAX) as i16 - PITCH_BEND_CENTER as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_center() {
        assert_eq!(split_pitch_bend(PITCH_BEND_CENTER), (0x00, 0x40));
    }

    #[test]
    fn test_split_extremes() {
        assert_eq!(split_pitch_bend(0), (0, 0));
        assert_eq!(split_pitch_bend(PITCH_BEND_MAX), (0x7F, 0x7F));
    }

    #[test]
    fn test_split_covers_full_range() {
        for value in 0..=PITCH_BEND_MAX {
            let (lsb, msb) = split_pitch_bend(value);
            assert!(lsb <= 0x7F && msb <= 0x7F);
            assert_eq!(u16::from(lsb) | (u16::from(msb) << 7), value);
        }
    }

    #[test]
    fn test_split_masks_oversized_values() {
        assert!(!is_valid_pitch_bend(0x4000));
        assert_eq!(split_pitch_bend(0x4000), (0, 0));
        assert_eq!(split_pitch_bend(0xFFFF), (0x7F, 0x7F));
    }

    #[test]
    fn test_signed_conversion() {
        assert_eq!(pitch_bend_from_signed(0), PITCH_BEND_CENTER);
        assert_eq!(pitch_bend_from_signed(8191), PITCH_BEND_MAX);
        assert_eq!(pitch_bend_from_signed(-8192), 0);
        // Clamped
        assert_eq!(pitch_bend_from_signed(i16::MAX), PITCH_BEND_MAX);
        assert_eq!(pitch_bend_from_signed(i16::MIN), 0);

        assert_eq!(pitch_bend_to_signed(PITCH_BEND_CENTER), 0);
        assert_eq!(pitch_bend_to_signed(0), -8192);
        assert_eq!(pitch_bend_to_signed(PITCH_BEND_MAX), 8191);
    }
}
