//! Field-name recovery (spec §4.5). Unlike the Clang-only compiler
//! intrinsic the spec ports around, `syn` always has the source field
//! names available to the derive macro for named-field structs; the
//! capability gap that remains is tuple structs (no names to recover) and
//! an explicit opt-out via `#[refl(no_names)]`.

/// Implemented by every type deriving `Extend` / `ExtendNoDefault`.
/// Returns an empty slice when names are unavailable or suppressed,
/// exactly mirroring the spec's "degrades silently to empty" contract.
pub trait FieldNames {
    fn field_names() -> &'static [&'static str];
}
