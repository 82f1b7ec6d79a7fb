//! `define_port_error!`: error enums for port adapters.
//!
//! Each variant carries its display message inline and gets a snake_case
//! constructor. Struct variants' constructors accept `impl Into<T>` for every
//! field, so adapters can pass `&str` where the variant stores `String`.

macro_rules! define_port_error {
    (@constructor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@constructor $variant:ident ( $( $field:ident : $ty:ty ),* )) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub fn [<$variant:snake>]( $( $field: impl Into<$ty> ),* ) -> Self {
                Self::$variant { $( $field: $field.into() ),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field: $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant $( ( $( $field: $ty ),* ) )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
