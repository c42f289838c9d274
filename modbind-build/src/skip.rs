//! Records of traits and members left out of generation.
//!
//! Dropping is never an error, but each drop is kept here so the build
//! script can surface it.

use std::fmt;

/// Why a trait or member was not bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Trait extends `JsInterop` but has no usable `#[js_module("...")]`.
    MissingModule,
    /// Trait has `#[js_module]` but does not extend `JsInterop`.
    MissingMarker,
    /// A member with the same name was declared earlier.
    DuplicateMember,
    /// Member is not an `async fn`.
    NotAsync,
    /// Member is `async` but does not return `InteropResult<T>`.
    UnsupportedReturn { found: String },
    /// Member has no `&self` receiver.
    NotCallable,
    /// Member declares generic parameters.
    Generic,
    /// Member has a default body, so the trait already implements it.
    ProvidedMethod,
    /// No members survived extraction.
    NoMembers,
    /// Another binding already produces a proxy with the same name.
    DuplicateProxy { proxy: String },
    /// The trait, or a module enclosing it, is private to a module the
    /// generated code does not live in.
    NotVisible,
    /// Trait declares generic parameters or a where clause.
    GenericTrait,
    /// Trait has an associated const or type a proxy cannot supply.
    AssociatedItem { name: String },
    /// Required methods were dropped, so no proxy could implement the trait.
    UnboundRequiredMembers { members: Vec<String> },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingModule => f.write_str("missing #[js_module(\"...\")] attribute"),
            SkipReason::MissingMarker => f.write_str("trait does not extend JsInterop"),
            SkipReason::DuplicateMember => f.write_str("duplicate member name; the first declaration wins"),
            SkipReason::NotAsync => f.write_str("member is not an async fn"),
            SkipReason::UnsupportedReturn { found } => {
                write!(f, "return type `{found}` is not InteropResult<T>")
            }
            SkipReason::NotCallable => f.write_str("member has no &self receiver"),
            SkipReason::Generic => f.write_str("generic members cannot be proxied"),
            SkipReason::ProvidedMethod => f.write_str("member has a default body"),
            SkipReason::NoMembers => f.write_str("no bindable members"),
            SkipReason::DuplicateProxy { proxy } => write!(f, "proxy `{proxy}` is already generated"),
            SkipReason::NotVisible => {
                f.write_str("trait is not visible from the generated module; make it pub or pub(crate)")
            }
            SkipReason::GenericTrait => f.write_str("generic traits cannot be proxied"),
            SkipReason::AssociatedItem { name } => {
                write!(f, "associated item `{name}` cannot be provided by a proxy")
            }
            SkipReason::UnboundRequiredMembers { members } => write!(
                f,
                "no proxy generated: required members `{}` cannot be bound",
                members.join("`, `")
            ),
        }
    }
}

/// A dropped trait (`member == None`) or member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub interface: String,
    pub member: Option<String>,
    pub reason: SkipReason,
}

impl Skipped {
    pub fn interface(interface: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            interface: interface.into(),
            member: None,
            reason,
        }
    }

    pub fn member(interface: impl Into<String>, member: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            interface: interface.into(),
            member: Some(member.into()),
            reason,
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "skipped {}::{}: {}", self.interface, member, self.reason),
            None => write!(f, "skipped {}: {}", self.interface, self.reason),
        }
    }
}
