use crate::{
    convert::{TruncateError, TruncateFrom},
    limits::{NumericLimits, ScalarKindExt},
};
use serde::Serialize;
use std::{
    fmt,
    io::{self, Write},
};
use typeprobe_primitives::{ALL_SCALAR_KINDS, ScalarKind};

/// Floating-point source used by the narrowing demonstration.
pub const NARROWING_SOURCE: f64 = 3.14159;

/// Fixed text emitted as the report's final line.
pub const GREETING: &str = "hello";

///
/// SizeEntry
/// One scalar kind with its storage size on this platform.
///

#[derive(Clone, Debug, Serialize)]
pub struct SizeEntry {
    pub label: &'static str,
    pub size_bytes: usize,
}

///
/// LimitsEntry
/// Numeric bounds of one scalar kind.
///

#[derive(Clone, Debug, Serialize)]
pub struct LimitsEntry {
    pub label: &'static str,
    pub limits: NumericLimits,
}

///
/// NarrowingEntry
/// A float source and its truncated integer counterpart.
///

#[derive(Clone, Debug, Serialize)]
pub struct NarrowingEntry {
    pub source: f64,
    pub target: &'static str,
    pub truncated: i32,
}

///
/// TypeReport
///
/// The full introspection report: per-kind sizes in registry order, the
/// signed-integer bounds pair, one narrowing demonstration, and the
/// greeting. Output is byte-identical across runs on the same platform.
///

#[derive(Clone, Debug, Serialize)]
pub struct TypeReport {
    pub sizes: Vec<SizeEntry>,
    pub int_limits: LimitsEntry,
    pub narrowing: NarrowingEntry,
    pub greeting: String,
}

impl TypeReport {
    /// Assemble the report from the platform's type facts.
    pub fn collect() -> Result<Self, TruncateError> {
        let sizes = ALL_SCALAR_KINDS
            .iter()
            .map(|kind| SizeEntry {
                label: kind.label(),
                size_bytes: kind.size_bytes(),
            })
            .collect();

        let int_kind = ScalarKind::Int32;
        let int_limits = LimitsEntry {
            label: int_kind.label(),
            limits: int_kind.limits().expect("i32 is numeric"),
        };

        let narrowing = NarrowingEntry {
            source: NARROWING_SOURCE,
            target: int_kind.label(),
            truncated: i32::truncate_from(NARROWING_SOURCE)?,
        };

        Ok(Self {
            sizes,
            int_limits,
            narrowing,
            greeting: GREETING.to_string(),
        })
    }

    /// One formatted line per reported fact, in report order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.sizes.len() + 4);

        for entry in &self.sizes {
            lines.push(format!(
                "size_of::<{}>() = {}",
                entry.label, entry.size_bytes
            ));
        }

        lines.push(format!(
            "{}::MIN = {}",
            self.int_limits.label, self.int_limits.limits.min
        ));
        lines.push(format!(
            "{}::MAX = {}",
            self.int_limits.label, self.int_limits.limits.max
        ));
        lines.push(format!(
            "{} as {} = {}",
            self.narrowing.source, self.narrowing.target, self.narrowing.truncated
        ));
        lines.push(self.greeting.clone());

        lines
    }

    /// Stream the plain-text report to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }

        Ok(())
    }
}

impl fmt::Display for TypeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

///
/// TESTS
///
