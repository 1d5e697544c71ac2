//! ## Crate layout
//! - `core`: limits, truncating conversion, and the introspection report.
//! - `primitives`: the scalar-kind registry and its metadata.
//!
//! The `prelude` module mirrors the surface used by the CLI and by
//! downstream callers that only want the report.

pub use typeprobe_core as core;
pub use typeprobe_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{Error, TypeReport};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        ALL_SCALAR_KINDS, Error, GREETING, LimitValue, NARROWING_SOURCE, NumericLimits,
        ScalarFamily, ScalarKind, ScalarKindExt as _, ScalarMetadata, TruncateError,
        TruncateFrom as _, TypeReport,
    };
}

///
/// TESTS
///
