//! Parsing helpers for strings carried by the descriptor model.

use anyhow::{Context, Result};
use syn::{Ident, Path, Type};

pub(crate) fn parse_ident(name: &str) -> Result<Ident> {
    syn::parse_str(name).with_context(|| format!("`{name}` is not a valid identifier"))
}

pub(crate) fn parse_type(ty: &str) -> Result<Type> {
    syn::parse_str(ty).with_context(|| format!("`{ty}` is not a valid type"))
}

pub(crate) fn parse_path(path: &str) -> Result<Path> {
    syn::parse_str(path).with_context(|| format!("`{path}` is not a valid module path"))
}
