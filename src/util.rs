// Pulse Oxi: Utility helpers

/// The smaller of `a` and `b`.
///
/// Only needs `PartialOrd`, so it works on the `f32` voltage readings too.
/// Returns `a` unless `a > b`: ties and unordered values (NaN) keep `a`.
#[inline]
pub fn get_min<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        b
    } else {
        a
    }
}

/// Number of elements in a fixed-size array.
pub const fn array_size<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;

    #[test]
    fn min_of_integers() {
        assert_eq!(get_min(3, 7), 3);
        assert_eq!(get_min(7, 3), 3);
        assert_eq!(get_min(PULSE_BUFF_SIZE, CHART_BUFF_SIZE), PULSE_BUFF_SIZE);
    }

    #[test]
    fn min_of_floats() {
        assert_eq!(get_min(MIN_USB_VOL, 4.2), 4.2);
        assert_eq!(get_min(-0.5f32, 0.0), -0.5);
    }

    #[test]
    fn min_keeps_first_when_unordered() {
        assert!(get_min(f32::NAN, 1.0).is_nan());
        assert_eq!(get_min(1.0, f32::NAN), 1.0);
    }

    #[test]
    fn array_size_is_length() {
        let samples = [0u16; HEART_RATE_BUFF_SIZE];
        assert_eq!(array_size(&samples), HEART_RATE_BUFF_SIZE);
        const N: usize = array_size(&TIMERS);
        assert_eq!(N, 7);
    }
}
