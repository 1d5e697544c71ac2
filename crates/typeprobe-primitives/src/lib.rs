#[macro_use]
mod macros;

///
/// ScalarKind
///
/// Canonical scalar kind used for shared introspection metadata.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Bool,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Isize,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Usize,
    Float32,
    Float64,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_registry!(metadata_from_registry, self)
    }

    /// Return the Rust type name for this scalar kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Return the classification family for this scalar kind.
    #[must_use]
    pub const fn family(self) -> ScalarFamily {
        self.metadata().family
    }

    /// Return the storage size in bytes of this scalar kind's Rust type.
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        self.metadata().size_bytes
    }

    /// Return whether values of this kind carry a sign.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        self.metadata().is_signed
    }

    /// Return whether this kind's width follows the platform pointer width.
    #[must_use]
    pub const fn is_pointer_sized(self) -> bool {
        self.metadata().is_pointer_sized
    }

    /// Return whether this scalar kind has numeric bounds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self.family(),
            ScalarFamily::SignedInt | ScalarFamily::UnsignedInt | ScalarFamily::Float
        )
    }
}

///
/// ScalarMetadata
///
/// Introspection metadata shared across the core/report layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub label: &'static str,
    pub family: ScalarFamily,
    pub size_bytes: usize,
    pub is_signed: bool,
    pub is_pointer_sized: bool,
}

///
/// ScalarFamily
///
/// Coarse scalar classification used for limits routing and reporting.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarFamily {
    Bool,
    Char,
    SignedInt,
    UnsignedInt,
    Float,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 16] = scalar_registry!(all_kinds_from_registry);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_is_stable() {
        assert_eq!(ALL_SCALAR_KINDS[0], ScalarKind::Bool);
        assert_eq!(ALL_SCALAR_KINDS[15], ScalarKind::Float64);
        assert_eq!(ALL_SCALAR_KINDS.len(), 16);
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in ALL_SCALAR_KINDS.iter().enumerate() {
            for b in &ALL_SCALAR_KINDS[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn sizes_are_positive_and_ordered() {
        for kind in ALL_SCALAR_KINDS {
            assert!(kind.size_bytes() > 0, "{} has zero size", kind.label());
        }

        // widening order within each integer family
        assert!(ScalarKind::Int8.size_bytes() <= ScalarKind::Int16.size_bytes());
        assert!(ScalarKind::Int16.size_bytes() <= ScalarKind::Int32.size_bytes());
        assert!(ScalarKind::Int32.size_bytes() <= ScalarKind::Int64.size_bytes());
        assert!(ScalarKind::Int64.size_bytes() <= ScalarKind::Int128.size_bytes());
        assert!(ScalarKind::Uint8.size_bytes() <= ScalarKind::Uint16.size_bytes());
        assert!(ScalarKind::Uint16.size_bytes() <= ScalarKind::Uint32.size_bytes());
        assert!(ScalarKind::Uint32.size_bytes() <= ScalarKind::Uint64.size_bytes());
        assert!(ScalarKind::Uint64.size_bytes() <= ScalarKind::Uint128.size_bytes());
    }

    #[test]
    fn fixed_width_kinds_match_their_rust_types() {
        assert_eq!(ScalarKind::Bool.size_bytes(), 1);
        assert_eq!(ScalarKind::Char.size_bytes(), 4);
        assert_eq!(ScalarKind::Int8.size_bytes(), 1);
        assert_eq!(ScalarKind::Int128.size_bytes(), 16);
        assert_eq!(ScalarKind::Float32.size_bytes(), 4);
        assert_eq!(ScalarKind::Float64.size_bytes(), 8);
    }

    #[test]
    fn pointer_sized_kinds_track_the_platform() {
        assert_eq!(
            ScalarKind::Isize.size_bytes(),
            core::mem::size_of::<isize>()
        );
        assert_eq!(
            ScalarKind::Usize.size_bytes(),
            core::mem::size_of::<usize>()
        );
        assert!(ScalarKind::Isize.is_pointer_sized());
        assert!(ScalarKind::Usize.is_pointer_sized());
        assert!(!ScalarKind::Int64.is_pointer_sized());
    }

    #[test]
    fn numeric_classification_excludes_bool_and_char() {
        assert!(!ScalarKind::Bool.is_numeric());
        assert!(!ScalarKind::Char.is_numeric());
        assert!(ScalarKind::Int32.is_numeric());
        assert!(ScalarKind::Uint64.is_numeric());
        assert!(ScalarKind::Float64.is_numeric());
    }
}
