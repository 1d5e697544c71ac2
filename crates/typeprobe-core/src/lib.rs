//! ## Crate layout
//! - `convert`: fallible truncating float-to-integer conversion.
//! - `error`: shared error type for report assembly and rendering.
//! - `limits`: numeric bounds for every numeric scalar kind.
//! - `report`: the deterministic type-introspection report.

mod convert;
mod error;
mod limits;
mod report;

pub use convert::{TruncateError, TruncateFrom};
pub use error::Error;
pub use limits::{LimitValue, NumericLimits, ScalarKindExt};
pub use report::{GREETING, LimitsEntry, NARROWING_SOURCE, NarrowingEntry, SizeEntry, TypeReport};

// re-export the registry surface so downstream crates only need one import
pub use typeprobe_primitives::{ALL_SCALAR_KINDS, ScalarFamily, ScalarKind, ScalarMetadata};
