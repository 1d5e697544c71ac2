#[macro_export]
macro_rules! scalar_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Bool,
                bool,
                "bool",
                Bool,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Char,
                char,
                "char",
                Char,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Int8,
                i8,
                "i8",
                SignedInt,
                is_signed = true,
                is_pointer_sized = false
            ),
            (
                Int16,
                i16,
                "i16",
                SignedInt,
                is_signed = true,
                is_pointer_sized = false
            ),
            (
                Int32,
                i32,
                "i32",
                SignedInt,
                is_signed = true,
                is_pointer_sized = false
            ),
            (
                Int64,
                i64,
                "i64",
                SignedInt,
                is_signed = true,
                is_pointer_sized = false
            ),
            (
                Int128,
                i128,
                "i128",
                SignedInt,
                is_signed = true,
                is_pointer_sized = false
            ),
            (
                Isize,
                isize,
                "isize",
                SignedInt,
                is_signed = true,
                is_pointer_sized = true
            ),
            (
                Uint8,
                u8,
                "u8",
                UnsignedInt,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Uint16,
                u16,
                "u16",
                UnsignedInt,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Uint32,
                u32,
                "u32",
                UnsignedInt,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Uint64,
                u64,
                "u64",
                UnsignedInt,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Uint128,
                u128,
                "u128",
                UnsignedInt,
                is_signed = false,
                is_pointer_sized = false
            ),
            (
                Usize,
                usize,
                "usize",
                UnsignedInt,
                is_signed = false,
                is_pointer_sized = true
            ),
            (
                Float32,
                f32,
                "f32",
                Float,
                is_signed = true,
                is_pointer_sized = false
            ),
            (
                Float64,
                f64,
                "f64",
                Float,
                is_signed = true,
                is_pointer_sized = false
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_registry {
    ($macro:ident) => {
        $crate::scalar_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $ty:ty, $label:literal, $family:ident, is_signed = $is_signed:expr, is_pointer_sized = $is_pointer_sized:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    label: $label,
                    family: $crate::ScalarFamily::$family,
                    size_bytes: ::core::mem::size_of::<$ty>(),
                    is_signed: $is_signed,
                    is_pointer_sized: $is_pointer_sized,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, $ty:ty, $label:literal, $family:ident, is_signed = $is_signed:expr, is_pointer_sized = $is_pointer_sized:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
    ( @args $($ignore:tt)*; @entries $( ($scalar:ident, $ty:ty, $label:literal, $family:ident, is_signed = $is_signed:expr, is_pointer_sized = $is_pointer_sized:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
