//! `#[js_module]`: validation of bound traits.
//!
//! The marker attributes are read by `modbind-build` from source. Here they
//! are only checked; the helper attributes stay in place and expand to
//! nothing on their own.

use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::{Attribute, Error, ItemTrait, LitStr, Meta, Result, TraitItem, TypeParamBound, parse_quote, spanned::Spanned};

pub(crate) const EXPORT_ATTR: &str = "js_export";
pub(crate) const DEFAULT_EXPORT_ATTR: &str = "js_default_export";
pub(crate) const NAME_ATTR: &str = "js_name";
const MARKER_TRAIT: &str = "JsInterop";
const ASYNC_TRAIT_ATTR: &str = "async_trait";

pub(crate) struct InteropTrait {
    item: ItemTrait,
}

impl InteropTrait {
    pub(crate) fn from_tokens(attr: TokenStream2, item: TokenStream2) -> Result<Self> {
        syn::parse2::<LitStr>(attr.clone()).map_err(|_| {
            Error::new(
                attr.span(),
                "#[js_module] expects the module path as a string, e.g. #[js_module(\"./js/module.js\")]",
            )
        })?;

        let mut item: ItemTrait = syn::parse2(item)
            .map_err(|err| Error::new(err.span(), "#[js_module] can only be applied to traits"))?;

        if !extends_marker(&item) {
            return Err(Error::new(
                item.ident.span(),
                format!("traits bound with #[js_module] must extend modbind::{MARKER_TRAIT}"),
            ));
        }

        check_helpers(&item.attrs, &[EXPORT_ATTR, DEFAULT_EXPORT_ATTR])?;
        for trait_item in &item.items {
            if let TraitItem::Fn(method) = trait_item {
                check_helpers(&method.attrs, &[NAME_ATTR])?;
            }
        }

        // Generated proxies implement the trait through `async_trait`
        if !item.attrs.iter().any(|attr| is_named(attr, ASYNC_TRAIT_ATTR)) {
            item.attrs.push(parse_quote!(#[::modbind::async_trait]));
        }

        Ok(Self { item })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        self.item.to_token_stream()
    }
}

/// Validate the helper attributes named in `helpers`.
fn check_helpers(attrs: &[Attribute], helpers: &[&str]) -> Result<()> {
    for attr in attrs {
        if let Some(name) = helper_name(attr).filter(|name| helpers.contains(name)) {
            validate_helper(name, &attr.meta)?;
        }
    }
    Ok(())
}

fn is_named(attr: &Attribute, name: &str) -> bool {
    attr.path().segments.last().is_some_and(|segment| segment.ident == name)
}

fn helper_name(attr: &Attribute) -> Option<&'static str> {
    let ident = &attr.path().segments.last()?.ident;
    [EXPORT_ATTR, DEFAULT_EXPORT_ATTR, NAME_ATTR]
        .into_iter()
        .find(|name| ident == name)
}

/// Check a helper's arguments: `js_name` needs a string, `js_export` takes an
/// optional string, `js_default_export` takes nothing.
fn validate_helper(name: &str, meta: &Meta) -> Result<()> {
    match (name, meta) {
        (DEFAULT_EXPORT_ATTR, Meta::Path(_)) => Ok(()),
        (DEFAULT_EXPORT_ATTR, other) => Err(Error::new(other.span(), "#[js_default_export] takes no arguments")),
        (EXPORT_ATTR, Meta::Path(_)) => Ok(()),
        (EXPORT_ATTR, Meta::List(list)) => list
            .parse_args::<LitStr>()
            .map(|_| ())
            .map_err(|_| Error::new(list.span(), "#[js_export] expects an export name string")),
        (NAME_ATTR, Meta::List(list)) => list
            .parse_args::<LitStr>()
            .map(|_| ())
            .map_err(|_| Error::new(list.span(), "#[js_name] expects a wire name string")),
        (_, other) => Err(Error::new(other.span(), format!("#[{name}] expects a string argument"))),
    }
}

fn extends_marker(item: &ItemTrait) -> bool {
    item.supertraits.iter().any(|bound| match bound {
        TypeParamBound::Trait(trait_bound) => trait_bound
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == MARKER_TRAIT),
        _ => false,
    })
}
