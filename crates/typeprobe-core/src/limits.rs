use derive_more::Display;
use serde::Serialize;
use typeprobe_primitives::ScalarKind;

///
/// LimitValue
///
/// One numeric bound; the payload arm follows the owning kind's family so
/// 128-bit and pointer-sized bounds are carried without loss.
///

#[derive(Clone, Copy, Debug, Display, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LimitValue {
    #[display("{_0}")]
    Int(i128),
    #[display("{_0}")]
    Uint(u128),
    #[display("{_0}")]
    Float(f64),
}

///
/// NumericLimits
///
/// Minimum and maximum representable value of one numeric scalar kind.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NumericLimits {
    pub min: LimitValue,
    pub max: LimitValue,
}

impl NumericLimits {
    #[must_use]
    pub const fn int(min: i128, max: i128) -> Self {
        Self {
            min: LimitValue::Int(min),
            max: LimitValue::Int(max),
        }
    }

    #[must_use]
    pub const fn uint(min: u128, max: u128) -> Self {
        Self {
            min: LimitValue::Uint(min),
            max: LimitValue::Uint(max),
        }
    }

    #[must_use]
    pub const fn float(min: f64, max: f64) -> Self {
        Self {
            min: LimitValue::Float(min),
            max: LimitValue::Float(max),
        }
    }
}

///
/// ScalarKindExt
///
/// Limits lookup for the registry kinds; lives here rather than in the
/// primitives crate so the registry stays dependency-free.
///

pub trait ScalarKindExt {
    /// Return the numeric bounds of this kind, or `None` for non-numeric
    /// kinds (`Bool`, `Char`).
    fn limits(self) -> Option<NumericLimits>;
}

impl ScalarKindExt for ScalarKind {
    #[allow(clippy::cast_lossless)]
    fn limits(self) -> Option<NumericLimits> {
        let limits = match self {
            Self::Bool | Self::Char => return None,
            Self::Int8 => NumericLimits::int(i128::from(i8::MIN), i128::from(i8::MAX)),
            Self::Int16 => NumericLimits::int(i128::from(i16::MIN), i128::from(i16::MAX)),
            Self::Int32 => NumericLimits::int(i128::from(i32::MIN), i128::from(i32::MAX)),
            Self::Int64 => NumericLimits::int(i128::from(i64::MIN), i128::from(i64::MAX)),
            Self::Int128 => NumericLimits::int(i128::MIN, i128::MAX),
            Self::Isize => NumericLimits::int(isize::MIN as i128, isize::MAX as i128),
            Self::Uint8 => NumericLimits::uint(u128::from(u8::MIN), u128::from(u8::MAX)),
            Self::Uint16 => NumericLimits::uint(u128::from(u16::MIN), u128::from(u16::MAX)),
            Self::Uint32 => NumericLimits::uint(u128::from(u32::MIN), u128::from(u32::MAX)),
            Self::Uint64 => NumericLimits::uint(u128::from(u64::MIN), u128::from(u64::MAX)),
            Self::Uint128 => NumericLimits::uint(u128::MIN, u128::MAX),
            Self::Usize => NumericLimits::uint(usize::MIN as u128, usize::MAX as u128),
            Self::Float32 => NumericLimits::float(f64::from(f32::MIN), f64::from(f32::MAX)),
            Self::Float64 => NumericLimits::float(f64::MIN, f64::MAX),
        };

        Some(limits)
    }
}

///
/// TESTS
///
