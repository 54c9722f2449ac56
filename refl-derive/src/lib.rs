//! `#[derive(Extend)]` / `#[derive(ExtendNoDefault)]`: the entry points.
//!
//! Modeled on `gel-derive`'s derive macros — parse the `DeriveInput`,
//! validate it, and hand off to focused helper modules that return
//! `syn::Result`, turning any `Err` into `err.to_compile_error().into()`
//! at the top level rather than panicking.

mod attrs;
mod codegen;
mod extenders;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

use attrs::parse_container_attrs;
use codegen::{
    collect_fields, gen_comparable, gen_hashable, gen_names, gen_printable, gen_stringify,
    gen_streamable, gen_to_tuple, FieldInfo, MAX_FIELDS,
};

/// `#[derive(Extend)]`: synthesizes `to_tuple`/`to_tuple_mut`, `FieldNames`,
/// and the extenders named by `#[refl(extend(..))]`, or the `Default`
/// bundle (`Stringify, Printable, Streamable, Comparable, Hashable`) when
/// no explicit list is given (spec §4.7).
#[proc_macro_derive(Extend, attributes(refl))]
pub fn derive_extend(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_impl(input, true)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// `#[derive(ExtendNoDefault)]`: the same machinery as `Extend`, but
/// requires an explicit `#[refl(extend(..))]` list — there is no implicit
/// `Default` bundle (spec §4.7, "an extender list is always required").
#[proc_macro_derive(ExtendNoDefault, attributes(refl))]
pub fn derive_extend_no_default(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_impl(input, false)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn derive_impl(input: DeriveInput, allow_default_bundle: bool) -> syn::Result<proc_macro2::TokenStream> {
    let ident = input.ident.clone();

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "not decomposable: reflection only supports structs, not enums",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "not decomposable: reflection only supports structs, not unions",
            ))
        }
    };

    let container_attrs = parse_container_attrs(&input.attrs)?;

    let requested: Vec<String> = match (&container_attrs.extend, allow_default_bundle) {
        (Some(tags), _) => tags.clone(),
        (None, true) => vec!["Default".to_string()],
        (None, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ExtendNoDefault requires #[refl(extend(...))] naming the extender tags explicitly",
            ))
        }
    };

    let resolved = extenders::resolve(&requested)
        .map_err(|msg| syn::Error::new_spanned(&input.ident, msg))?;

    let fields: Vec<FieldInfo> = collect_fields(&data.fields)?;
    if fields.len() > MAX_FIELDS {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "{} has {} fields, exceeding the {}-field reflection ceiling",
                ident,
                fields.len(),
                MAX_FIELDS
            ),
        ));
    }

    let mut out = proc_macro2::TokenStream::new();
    out.extend(gen_to_tuple(&ident, &fields));
    out.extend(gen_names(&ident, &fields, container_attrs.no_names));

    for tag in &resolved {
        let impl_tokens = match tag.as_str() {
            "Stringify" => gen_stringify(&ident, &fields, container_attrs.no_names),
            "Printable" => gen_printable(&ident),
            "Streamable" => gen_streamable(&ident),
            "Comparable" => gen_comparable(&ident, &fields),
            "Hashable" => gen_hashable(&ident, &fields),
            other => unreachable!("extenders::resolve returned an unhandled tag `{other}`"),
        };
        out.extend(impl_tokens);
    }

    Ok(quote! { #out })
}
