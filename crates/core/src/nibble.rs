//! Bit slicing of clock values into nibbles.

/// The 4-bit value of nibble `index`: bits `[4*index, 4*index + 3]`.
///
/// Indices past the width of `u32` yield 0.
///
/// ```
/// use bin_clock_core::nibble::nibble_of;
///
/// assert_eq!(nibble_of(0xABCD, 0), 0xD);
/// assert_eq!(nibble_of(0xABCD, 3), 0xA);
/// assert_eq!(nibble_of(0xABCD, 8), 0);
/// ```
#[inline]
pub fn nibble_of(value: u32, index: u8) -> u8 {
    (value.checked_shr(index as u32 * 4).unwrap_or(0) & 0xF) as u8
}

/// Whether bit `group` of a nibble value is set.
#[inline]
pub fn bit_set(nibble: u8, group: u8) -> bool {
    group < 4 && (nibble >> group) & 1 == 1
}

/// Split a 16-bit value into its four nibbles, least significant first.
pub fn split_u16(value: u16) -> [u8; 4] {
    let v = value as u32;
    [nibble_of(v, 0), nibble_of(v, 1), nibble_of(v, 2), nibble_of(v, 3)]
}

/// Recompose a 16-bit value from nibbles given least significant first.
pub fn compose_u16(nibbles: [u8; 4]) -> u16 {
    nibbles
        .iter()
        .enumerate()
        .fold(0u16, |acc, (n, &v)| acc | (((v & 0xF) as u16) << (n * 4)))
}

/// High and low half-words of a 32-bit value.
#[inline]
pub fn halves(value: u32) -> (u16, u16) {
    ((value >> 16) as u16, value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bit_set_ignores_foreign_groups() {
        assert!(bit_set(0b0101, 0));
        assert!(!bit_set(0b0101, 1));
        assert!(bit_set(0b0101, 2));
        assert!(!bit_set(0xF, 4));
    }

    #[test]
    fn halves_split_day_counter_from_time() {
        assert_eq!(halves(0x0003_8000), (3, 0x8000));
        assert_eq!(halves(u32::MAX), (0xFFFF, 0xFFFF));
    }

    proptest! {
        #[test]
        fn split_then_compose_is_identity(v in any::<u16>()) {
            prop_assert_eq!(compose_u16(split_u16(v)), v);
        }

        #[test]
        fn nibbles_sum_back_to_value(v in any::<u16>()) {
            let sum: u32 = (0..4u8).map(|n| (nibble_of(v as u32, n) as u32) << (4 * n)).sum();
            prop_assert_eq!(sum, v as u32);
        }
    }
}
