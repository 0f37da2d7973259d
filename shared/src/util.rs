/// Adds `delta` to `value` modulo `size`. The result always lies in `[0, size)`.
#[inline(always)]
pub fn wrap_coord(value: u32, delta: i32, size: u32) -> u32 {
    debug_assert!(size > 0, "grid size must be positive");
    (value as i64 + delta as i64).rem_euclid(size as i64) as u32
}

/// Signed distance from `from` to `to` along one axis, taking the shorter way around.
pub fn wrapped_delta(from: u32, to: u32, size: u32) -> i32 {
    let size = size as i64;
    let raw = (to as i64 - from as i64).rem_euclid(size);
    if raw > size / 2 {
        (raw - size) as i32
    } else {
        raw as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_coord_basic() {
        assert_eq!(wrap_coord(50, 1, 100), 51);
        assert_eq!(wrap_coord(50, -1, 100), 49);
        assert_eq!(wrap_coord(99, 1, 100), 0);
        assert_eq!(wrap_coord(0, -1, 100), 99);
    }

    #[test]
    fn test_wrap_coord_large_deltas() {
        assert_eq!(wrap_coord(10, 250, 100), 60);
        assert_eq!(wrap_coord(10, -250, 100), 60);
    }

    #[test]
    fn test_wrap_coord_single_cell_grid() {
        assert_eq!(wrap_coord(0, 1, 1), 0);
        assert_eq!(wrap_coord(0, -1, 1), 0);
    }

    #[test]
    fn test_wrapped_delta_takes_short_way() {
        assert_eq!(wrapped_delta(50, 51, 100), 1);
        assert_eq!(wrapped_delta(50, 49, 100), -1);
        assert_eq!(wrapped_delta(99, 0, 100), 1);
        assert_eq!(wrapped_delta(0, 99, 100), -1);
    }

    proptest! {
        #[test]
        fn prop_wrap_coord_stays_in_range(
            size in 1u32..1000,
            value in 0u32..1000,
            delta in -1i32..=1,
        ) {
            let value = value % size;
            let wrapped = wrap_coord(value, delta, size);
            prop_assert!(wrapped < size);
        }

        #[test]
        fn prop_wrap_coord_inverts(size in 1u32..1000, value in 0u32..1000, delta in -5000i32..5000) {
            let value = value % size;
            prop_assert_eq!(wrap_coord(wrap_coord(value, delta, size), -delta, size), value);
        }
    }
}
