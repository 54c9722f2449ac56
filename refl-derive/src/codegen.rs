//! Per-extender code generation. Each `gen_*` function here corresponds to
//! one entry in `extenders::EXTENDERS` and is invoked once per resolved tag
//! from `lib.rs`. All of them build on `gen_to_tuple`'s `to_tuple()` /
//! `to_tuple_mut()`, the Rust stand-in for the spec's `ToTuple()` CRTP root
//! (spec §4.7 step 1) that every extender implementation is layered on top
//! of.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, Ident, Member, Type};

use crate::attrs::{parse_field_attrs, FieldAttrs};

/// The dispatch-ladder ceiling the spec fixes at 40 (spec §4.3, §7
/// "Arity overflow").
pub const MAX_FIELDS: usize = 40;

/// Tuple arity above which Rust's standard library stops implementing
/// `PartialEq`/`PartialOrd`/`Hash` for tuples, forcing `Comparable`/
/// `Hashable` to fall back to an explicit per-field chain instead of
/// routing through `to_tuple()` (see SPEC_FULL.md's mapping table).
pub const STD_TUPLE_TRAIT_LIMIT: usize = 12;

pub struct FieldInfo {
    pub member: Member,
    pub ty: Type,
    pub name: Option<String>,
    pub attrs: FieldAttrs,
}

pub fn collect_fields(fields: &Fields) -> syn::Result<Vec<FieldInfo>> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|f| {
                let attrs = parse_field_attrs(&f.attrs)?;
                let ident = f.ident.clone().expect("named field has an ident");
                Ok(FieldInfo {
                    member: Member::Named(ident.clone()),
                    ty: f.ty.clone(),
                    name: Some(ident.to_string()),
                    attrs,
                })
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let attrs = parse_field_attrs(&f.attrs)?;
                Ok(FieldInfo {
                    member: Member::Unnamed(syn::Index::from(i)),
                    ty: f.ty.clone(),
                    name: None,
                    attrs,
                })
            })
            .collect(),
        Fields::Unit => Ok(Vec::new()),
    }
}

/// Generates `to_tuple`/`to_tuple_mut`: the exact-arity tuple-of-references
/// materializer (spec §4.4), produced directly for this struct's field
/// count instead of selected from a 0..40 dispatch ladder, since the macro
/// already knows the arity.
pub fn gen_to_tuple(ident: &Ident, fields: &[FieldInfo]) -> TokenStream {
    let members: Vec<_> = fields.iter().map(|f| &f.member).collect();
    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    quote! {
        impl #ident {
            /// A tuple of references to every field, in declaration order
            /// (spec §4.4 `ToTuple`).
            pub fn to_tuple(&self) -> (#(&#types,)*) {
                (#(&self.#members,)*)
            }

            /// The mutable counterpart of [`Self::to_tuple`].
            pub fn to_tuple_mut(&mut self) -> (#(&mut #types,)*) {
                (#(&mut self.#members,)*)
            }
        }
    }
}

/// Generates the `FieldNames` impl (spec §4.5). Tuple-struct fields have no
/// `name`, so the array comes back empty for them without any extra
/// branching — the same code path that handles `#[refl(no_names)]`.
pub fn gen_names(ident: &Ident, fields: &[FieldInfo], no_names: bool) -> TokenStream {
    let names: Vec<&str> = if no_names {
        Vec::new()
    } else {
        fields.iter().filter_map(|f| f.name.as_deref()).collect()
    };
    let len = names.len();
    quote! {
        impl refl_core::names::FieldNames for #ident {
            fn field_names() -> &'static [&'static str] {
                const NAMES: [&'static str; #len] = [#(#names),*];
                &NAMES
            }
        }
    }
}

/// Best-effort, purely syntactic check for whether a field type is known to
/// lack a total order (`f32`/`f64`, at any depth reachable through a
/// reference/array/slice/tuple/single-argument generic such as `Option<T>`
/// or `Vec<T>`). `syn` hands the macro tokens, not resolved types, so this
/// cannot be a real trait-bound check; it catches the common case (a bare
/// or wrapped float field) well enough to decide whether `Eq`/`Ord` are
/// sound to emit for a given concrete struct.
fn type_may_lack_total_eq(ty: &Type) -> bool {
    match ty {
        Type::Path(p) => {
            let Some(seg) = p.path.segments.last() else {
                return false;
            };
            if seg.ident == "f32" || seg.ident == "f64" {
                return true;
            }
            match &seg.arguments {
                syn::PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
                    syn::GenericArgument::Type(t) => type_may_lack_total_eq(t),
                    _ => false,
                }),
                _ => false,
            }
        }
        Type::Reference(r) => type_may_lack_total_eq(&r.elem),
        Type::Array(a) => type_may_lack_total_eq(&a.elem),
        Type::Slice(s) => type_may_lack_total_eq(&s.elem),
        Type::Ptr(p) => type_may_lack_total_eq(&p.elem),
        Type::Paren(p) => type_may_lack_total_eq(&p.elem),
        Type::Group(g) => type_may_lack_total_eq(&g.elem),
        Type::Tuple(t) => t.elems.iter().any(type_may_lack_total_eq),
        _ => false,
    }
}

fn fields_support_total_eq(fields: &[FieldInfo]) -> bool {
    !fields.iter().any(|f| type_may_lack_total_eq(&f.ty))
}

/// Generates `Comparable` (spec §4.9): `PartialEq`/`PartialOrd` that
/// reduce to tuple comparison when the standard library still implements
/// those traits for this arity, or an explicit per-field chain above that
/// (see `STD_TUPLE_TRAIT_LIMIT`); additionally emits `Eq`/`Ord` when every
/// field is known to support a total order (SPEC_FULL.md's mapping table:
/// "`Eq`/`Ord` when every field supports them"), so reflected structs can
/// be used as `HashMap`/`BTreeMap` keys without the caller hand-writing
/// those impls.
pub fn gen_comparable(ident: &Ident, fields: &[FieldInfo]) -> TokenStream {
    let partial_eq_ord = if fields.len() <= STD_TUPLE_TRAIT_LIMIT {
        quote! {
            impl PartialEq for #ident {
                fn eq(&self, other: &Self) -> bool {
                    self.to_tuple() == other.to_tuple()
                }
            }

            impl PartialOrd for #ident {
                fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    self.to_tuple().partial_cmp(&other.to_tuple())
                }
            }
        }
    } else {
        let members: Vec<_> = fields.iter().map(|f| &f.member).collect();
        let eq_terms = members.iter().map(|m| quote! { self.#m == other.#m });
        let first = &members[0];
        let rest = &members[1..];
        let cmp_chain = rest.iter().fold(
            quote! { self.#first.partial_cmp(&other.#first) },
            |acc, m| {
                quote! {
                    match #acc {
                        Some(std::cmp::Ordering::Equal) => self.#m.partial_cmp(&other.#m),
                        other => other,
                    }
                }
            },
        );
        quote! {
            impl PartialEq for #ident {
                fn eq(&self, other: &Self) -> bool {
                    true #(&& #eq_terms)*
                }
            }

            impl PartialOrd for #ident {
                fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                    #cmp_chain
                }
            }
        }
    };

    let total_eq_ord = if !fields_support_total_eq(fields) {
        quote! {}
    } else if fields.len() <= STD_TUPLE_TRAIT_LIMIT {
        quote! {
            impl Eq for #ident {}

            impl Ord for #ident {
                fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                    self.to_tuple().cmp(&other.to_tuple())
                }
            }
        }
    } else {
        let members: Vec<_> = fields.iter().map(|f| &f.member).collect();
        let first = &members[0];
        let rest = &members[1..];
        let cmp_chain = rest.iter().fold(
            quote! { self.#first.cmp(&other.#first) },
            |acc, m| quote! { (#acc).then_with(|| self.#m.cmp(&other.#m)) },
        );
        quote! {
            impl Eq for #ident {}

            impl Ord for #ident {
                fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                    #cmp_chain
                }
            }
        }
    };

    quote! {
        #partial_eq_ord
        #total_eq_ord
    }
}

/// Generates `Hashable` (spec §4.9), with the same tuple-vs-chain split as
/// `gen_comparable` above `STD_TUPLE_TRAIT_LIMIT`.
///
/// Calls go through `::core::hash::Hash::hash(...)` fully qualified, not
/// `.hash(state)` method-call sugar: the latter requires `std::hash::Hash`
/// to be in scope at the derive site, which a caller's module has no
/// obligation to import (exactly the reason `#[derive(Hash)]` itself emits
/// fully-qualified calls rather than method syntax).
pub fn gen_hashable(ident: &Ident, fields: &[FieldInfo]) -> TokenStream {
    let body = if fields.len() <= STD_TUPLE_TRAIT_LIMIT {
        quote! { ::core::hash::Hash::hash(&self.to_tuple(), state); }
    } else {
        let members: Vec<_> = fields.iter().map(|f| &f.member).collect();
        quote! { #( ::core::hash::Hash::hash(&self.#members, state); )* }
    };
    quote! {
        impl std::hash::Hash for #ident {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                #body
            }
        }
    }
}

/// Generates the `Stringify` tag (spec §4.8): the one formatting routine
/// every other printing extender calls into. Field-level options
/// (`suppress`/`rename`/`redact`) are resolved here, at macro-expansion
/// time, from `#[refl(..)]` attributes rather than from a runtime
/// `T::StringifyFieldOptions` hook (see SPEC_FULL.md's mapping table).
pub fn gen_stringify(ident: &Ident, fields: &[FieldInfo], no_names: bool) -> TokenStream {
    let mut field_stmts = Vec::new();
    for f in fields {
        let member = &f.member;
        let name_tok = match (no_names, &f.name) {
            (false, Some(n)) => quote! { Some(#n) },
            _ => quote! { None },
        };
        let suppress = f.attrs.suppress;
        let rename_tok = f.attrs.rename.as_ref().map(|r| {
            quote! { field_opts.key_override_name = Some(#r); }
        });
        let redact_tok = f.attrs.redact.as_ref().map(|text| {
            let text = text.clone().unwrap_or_else(|| "<redacted>".to_string());
            quote! {
                field_opts.replacement_str = Some(#text);
                field_opts.replacement_other = Some(#text);
            }
        });
        field_stmts.push(quote! {
            {
                let mut field_opts = opts.clone();
                field_opts.suppress = field_opts.suppress || #suppress;
                #rename_tok
                #redact_tok
                if !field_opts.suppress {
                    refl_core::stringify::push_separator(&mut out, &field_opts, first_emitted);
                    refl_core::stringify::push_key(&mut out, &field_opts, #name_tok);
                    refl_core::stringify::StringifyValue::stringify_value(&self.#member, &field_opts, &mut out);
                    first_emitted = true;
                }
            }
        });
    }
    quote! {
        impl #ident {
            /// Formats this value under the given options (spec §4.8).
            pub fn to_reflected_string_with(&self, opts: &refl_core::stringify::StringifyFieldOptions) -> String {
                let mut out = String::from("{");
                let mut first_emitted = false;
                #(#field_stmts)*
                out.push('}');
                out
            }
        }

        impl refl_core::stringify::Reflected for #ident {
            fn reflected_to_string(&self, opts: &refl_core::stringify::StringifyFieldOptions) -> String {
                self.to_reflected_string_with(opts)
            }
        }

        impl refl_core::stringify::StringifyValue for #ident {
            fn stringify_value(&self, opts: &refl_core::stringify::StringifyFieldOptions, out: &mut String) {
                out.push_str(&self.to_reflected_string_with(opts));
            }
        }
    }
}

/// Generates `Printable` (spec §4.9): an inherent `to_reflected_string()`
/// using the process-wide default options.
pub fn gen_printable(ident: &Ident) -> TokenStream {
    quote! {
        impl #ident {
            pub fn to_reflected_string(&self) -> String {
                let opts = refl_core::mode::default_mode();
                self.to_reflected_string_with(&opts)
            }
        }
    }
}

/// Generates `Streamable` (spec §4.9): `Display`, using the same
/// process-wide default options as `Printable`.
pub fn gen_streamable(ident: &Ident) -> TokenStream {
    quote! {
        impl std::fmt::Display for #ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let opts = refl_core::mode::default_mode();
                f.write_str(&self.to_reflected_string_with(&opts))
            }
        }
    }
}
