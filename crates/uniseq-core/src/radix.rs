//! Positional notation over an arbitrary radix.

/// Returns the base-`radix` digits of `value`, most significant first.
///
/// Zero is the single digit `0`; any other value has a non-zero leading
/// digit. `radix` must be at least 2, which every [`Alphabet`](crate::Alphabet)
/// guarantees.
pub fn digits(value: u128, radix: usize) -> Vec<usize> {
    debug_assert!(radix >= 2, "radix must be at least 2, got {radix}");
    let radix = radix as u128;

    let mut out = Vec::with_capacity(digit_count(value, radix as usize));
    let mut rest = value;
    loop {
        out.push((rest % radix) as usize);
        rest /= radix;
        if rest == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// Number of base-`radix` digits needed for `value`.
///
/// This is `floor(log_radix(value)) + 1` for `value >= 1`, and `1` for zero.
pub fn digit_count(value: u128, radix: usize) -> usize {
    let radix = radix as u128;
    let mut count = 1;
    let mut rest = value / radix;
    while rest > 0 {
        count += 1;
        rest /= radix;
    }
    count
}

/// Folds most-significant-first digits back into a value.
///
/// Returns `None` if the result does not fit in a `u128`.
pub fn value_of(digits: &[usize], radix: usize) -> Option<u128> {
    digits.iter().try_fold(0_u128, |acc, &digit| {
        acc.checked_mul(radix as u128)?.checked_add(digit as u128)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_single_zero_digit() {
        for radix in 2..=36 {
            assert_eq!(digits(0, radix), vec![0]);
            assert_eq!(digit_count(0, radix), 1);
        }
    }

    #[test]
    fn binary_digits() {
        assert_eq!(digits(1, 2), vec![1]);
        assert_eq!(digits(2, 2), vec![1, 0]);
        assert_eq!(digits(5, 2), vec![1, 0, 1]);
        assert_eq!(digits(8, 2), vec![1, 0, 0, 0]);
    }

    #[test]
    fn matches_std_formatting_for_decimal() {
        for value in [0_u128, 7, 10, 99, 100, 12_345, 9_876_543_210] {
            let rendered: String = digits(value, 10)
                .into_iter()
                .map(|d| char::from_digit(d as u32, 10).unwrap())
                .collect();
            assert_eq!(rendered, value.to_string());
        }
    }

    #[test]
    fn digit_count_at_power_boundaries() {
        assert_eq!(digit_count(25, 26), 1);
        assert_eq!(digit_count(26, 26), 2);
        assert_eq!(digit_count(675, 26), 2);
        assert_eq!(digit_count(676, 26), 3);
    }

    #[test]
    fn u128_max_in_binary_has_128_digits() {
        let bits = digits(u128::MAX, 2);
        assert_eq!(bits.len(), 128);
        assert!(bits.iter().all(|&bit| bit == 1));
        assert_eq!(digit_count(u128::MAX, 2), 128);
    }

    #[test]
    fn value_of_inverts_digits() {
        for radix in [2, 3, 10, 26, 36] {
            for value in [0_u128, 1, 35, 36, 1_000, u64::MAX as u128, u128::MAX] {
                assert_eq!(value_of(&digits(value, radix), radix), Some(value));
            }
        }
    }

    #[test]
    fn value_of_reports_overflow() {
        assert_eq!(value_of(&[1; 129], 2), None);
    }
}
