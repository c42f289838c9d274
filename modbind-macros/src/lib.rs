use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Error, LitStr, spanned::Spanned};

mod interop_trait;

use interop_trait::{DEFAULT_EXPORT_ATTR, EXPORT_ATTR, InteropTrait, NAME_ATTR};

/// Bind a trait to a script module.
///
/// The trait must extend `modbind::JsInterop`. `#[js_export]`,
/// `#[js_default_export]` and member-level `#[js_name]` attributes are
/// validated here; `modbind-build` reads them from source to generate the
/// proxy. `#[async_trait]` is added when the trait does not carry it, since
/// generated proxies implement the trait through it.
///
/// ```text
/// use modbind::{InteropResult, JsInterop, async_trait, js_export, js_module, js_name};
///
/// #[js_module("./js/utilities.js")]
/// #[js_export("Utilities")]
/// #[async_trait]
/// pub trait IUtilitiesInterop: JsInterop {
///     #[js_name("focus")]
///     async fn focus_async(&self, id: String, selector: String) -> InteropResult<()>;
/// }
/// ```
#[proc_macro_attribute]
pub fn js_module(attr: TokenStream, item: TokenStream) -> TokenStream {
    match InteropTrait::from_tokens(attr.into(), item.into()) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Invoke members through a named export of the module.
#[proc_macro_attribute]
pub fn js_export(attr: TokenStream, item: TokenStream) -> TokenStream {
    passthrough(EXPORT_ATTR, attr.into(), item)
}

/// Invoke members through the module's default export.
///
/// Takes precedence over `#[js_export]`.
#[proc_macro_attribute]
pub fn js_default_export(attr: TokenStream, item: TokenStream) -> TokenStream {
    passthrough(DEFAULT_EXPORT_ATTR, attr.into(), item)
}

/// Override the name a member is invoked by.
#[proc_macro_attribute]
pub fn js_name(attr: TokenStream, item: TokenStream) -> TokenStream {
    passthrough(NAME_ATTR, attr.into(), item)
}

/// Validate a helper and leave the item unchanged.
fn passthrough(name: &str, attr: TokenStream2, item: TokenStream) -> TokenStream {
    let checked = match name {
        DEFAULT_EXPORT_ATTR if attr.is_empty() => Ok(()),
        DEFAULT_EXPORT_ATTR => Err(Error::new(attr.span(), "#[js_default_export] takes no arguments")),
        EXPORT_ATTR if attr.is_empty() => Ok(()),
        _ => syn::parse2::<LitStr>(attr.clone())
            .map(|_| ())
            .map_err(|_| Error::new(attr.span(), format!("#[{name}] expects a string argument"))),
    };

    match checked {
        Ok(()) => item,
        Err(err) => {
            let mut output: TokenStream = err.to_compile_error().into();
            output.extend(item);
            output
        }
    }
}
