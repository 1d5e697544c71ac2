use thiserror::Error as ThisError;

///
/// TruncateError
///
/// Rejections raised by truncating float-to-integer conversion.
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
pub enum TruncateError {
    #[error("cannot truncate non-finite value: {value}")]
    NonFinite { value: f64 },
    #[error("value {value} does not fit in {target} after truncation")]
    OutOfRange { value: f64, target: &'static str },
}

///
/// TruncateFrom
///
/// Fallible truncating conversion from f64; fractional part is discarded
/// toward zero before the range check.
///

pub trait TruncateFrom: Sized {
    fn truncate_from(value: f64) -> Result<Self, TruncateError>;
}

macro_rules! impl_truncate_from {
    ($( $ty:ty => $label:literal ),* $(,)?) => {
        $(
            impl TruncateFrom for $ty {
                fn truncate_from(value: f64) -> Result<Self, TruncateError> {
                    if !value.is_finite() {
                        return Err(TruncateError::NonFinite { value });
                    }

                    num_traits::cast(value.trunc()).ok_or(TruncateError::OutOfRange {
                        value,
                        target: $label,
                    })
                }
            }
        )*
    };
}

impl_truncate_from! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(i32::truncate_from(3.14159), Ok(3));
        assert_eq!(i32::truncate_from(-3.14159), Ok(-3));
        assert_eq!(i32::truncate_from(0.999), Ok(0));
        assert_eq!(i32::truncate_from(-0.999), Ok(0));
    }

    #[test]
    fn rejects_non_finite_sources() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                i64::truncate_from(value),
                Err(TruncateError::NonFinite { .. })
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_sources() {
        assert!(matches!(
            i8::truncate_from(128.0),
            Err(TruncateError::OutOfRange { target: "i8", .. })
        ));
        assert_eq!(i8::truncate_from(127.9), Ok(127));
        assert!(matches!(
            u32::truncate_from(-1.0),
            Err(TruncateError::OutOfRange { target: "u32", .. })
        ));
        // -0.9 truncates to zero, which unsigned targets accept
        assert_eq!(u32::truncate_from(-0.9), Ok(0));
    }

    #[test]
    fn boundary_values_round_trip() {
        assert_eq!(i32::truncate_from(f64::from(i32::MAX)), Ok(i32::MAX));
        assert_eq!(i32::truncate_from(f64::from(i32::MIN)), Ok(i32::MIN));
    }

    proptest! {
        #[test]
        fn truncation_matches_trunc_within_i32_range(value in -2_147_483_647.0f64..2_147_483_647.0) {
            let got = i32::truncate_from(value).expect("in-range source");
            prop_assert_eq!(f64::from(got), value.trunc());
        }

        #[test]
        fn truncation_never_moves_away_from_zero(value in -1.0e9f64..1.0e9) {
            let got = i64::truncate_from(value).expect("in-range source");
            #[allow(clippy::cast_precision_loss)]
            let got_f = got as f64;
            prop_assert!(got_f.abs() <= value.abs());
            prop_assert!((value.abs() - got_f.abs()) < 1.0);
        }
    }
}
