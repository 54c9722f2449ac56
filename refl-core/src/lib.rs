//! Runtime support crate backing `#[derive(Extend)]` / `#[derive(ExtendNoDefault)]`
//! from `refl-derive`.
//!
//! This crate does not itself decompose aggregates: in Rust, field lists are
//! read directly from the struct definition by the derive macro at
//! macro-expansion time, so there is no SFINAE-probing counterpart to port.
//! What remains, and is implemented here, is everything the macro-generated
//! code calls into at runtime: the stringify engine, the process-wide
//! stringify-mode cell, field-name exposure, and the compile-time search
//! primitives the original library specified as an independent unit.

pub mod mode;
pub mod names;
pub mod search;
pub mod stringify;

pub mod prelude {
    pub use crate::mode::{default_mode, set_default_mode};
    pub use crate::names::FieldNames;
    pub use crate::stringify::{
        push_key, push_separator, shape_string, EscapeMode, KeyMode, Reflected,
        StringifyFieldOptions, StringifyValue,
    };
}
