//! Parses `#[refl(..)]` container and field attributes. Modeled directly on
//! `gel-derive`'s `attrib.rs`: a small hand-written `syn::parse::Parse`
//! grammar over a punctuated attribute-argument list, rather than a
//! virtual runtime hook — field-level stringify options are resolved here,
//! at macro-expansion time, instead of via the spec's
//! `T::StringifyFieldOptions(v, i, name)` runtime callback.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token};

mod kw {
    syn::custom_keyword!(extend);
    syn::custom_keyword!(no_names);
    syn::custom_keyword!(rename);
    syn::custom_keyword!(suppress);
    syn::custom_keyword!(redact);
}

enum ContainerAttr {
    Extend(Punctuated<Ident, Token![,]>),
    NoNames,
}

enum FieldAttr {
    Rename(LitStr),
    Suppress,
    Redact(Option<LitStr>),
}

struct ContainerAttrList(Punctuated<ContainerAttr, Token![,]>);
struct FieldAttrList(Punctuated<FieldAttr, Token![,]>);

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::extend) {
            input.parse::<kw::extend>()?;
            let content;
            syn::parenthesized!(content in input);
            Ok(ContainerAttr::Extend(Punctuated::parse_terminated(&content)?))
        } else if lookahead.peek(kw::no_names) {
            input.parse::<kw::no_names>()?;
            Ok(ContainerAttr::NoNames)
        } else {
            Err(lookahead.error())
        }
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::rename) {
            input.parse::<kw::rename>()?;
            input.parse::<Token![=]>()?;
            Ok(FieldAttr::Rename(input.parse()?))
        } else if lookahead.peek(kw::suppress) {
            input.parse::<kw::suppress>()?;
            Ok(FieldAttr::Suppress)
        } else if lookahead.peek(kw::redact) {
            input.parse::<kw::redact>()?;
            if input.peek(Token![=]) {
                input.parse::<Token![=]>()?;
                Ok(FieldAttr::Redact(Some(input.parse()?)))
            } else {
                Ok(FieldAttr::Redact(None))
            }
        } else {
            Err(lookahead.error())
        }
    }
}

impl Parse for ContainerAttrList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Punctuated::parse_terminated(input).map(ContainerAttrList)
    }
}

impl Parse for FieldAttrList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Punctuated::parse_terminated(input).map(FieldAttrList)
    }
}

/// Parsed struct-level `#[refl(..)]` attributes.
#[derive(Default)]
pub struct ContainerAttrs {
    /// `None` means "no explicit list was given" (the default bundle
    /// applies for `#[derive(Extend)]`; `#[derive(ExtendNoDefault)]`
    /// requires this to be `Some`).
    pub extend: Option<Vec<String>>,
    pub no_names: bool,
}

/// Parsed per-field `#[refl(..)]` attributes.
#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub suppress: bool,
    /// `Some(None)` means "redact with the default placeholder",
    /// `Some(Some(text))` means "redact with this text".
    pub redact: Option<Option<String>>,
}

pub fn parse_container_attrs(attrs: &[syn::Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("refl") {
            continue;
        }
        let list: ContainerAttrList = attr.parse_args()?;
        for item in list.0 {
            match item {
                ContainerAttr::Extend(tags) => {
                    out.extend = Some(tags.into_iter().map(|id| id.to_string()).collect());
                }
                ContainerAttr::NoNames => out.no_names = true,
            }
        }
    }
    Ok(out)
}

pub fn parse_field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("refl") {
            continue;
        }
        let list: FieldAttrList = attr.parse_args()?;
        for item in list.0 {
            match item {
                FieldAttr::Rename(lit) => out.rename = Some(lit.value()),
                FieldAttr::Suppress => out.suppress = true,
                FieldAttr::Redact(lit) => out.redact = Some(lit.map(|l| l.value())),
            }
        }
    }
    Ok(out)
}
