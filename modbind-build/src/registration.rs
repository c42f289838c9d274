//! Registration compiler: one function binding every trait to its proxy.

use crate::model::ModuleBinding;
use crate::tokens::{parse_ident, parse_path};
use anyhow::{Context, Result};
use indexmap::IndexSet;
use proc_macro2::TokenStream;
use quote::quote;

/// Render the registration module for `bindings`, in the order given.
///
/// Proxies are referenced through sibling modules (`super::<proxy module>`),
/// matching the layout the generator writes.
pub fn render_registration(bindings: &[&ModuleBinding], function_name: &str) -> Result<String> {
    let function = parse_ident(function_name)?;

    // Distinct namespaces in first-seen order; the crate root has none.
    let namespaces: IndexSet<&str> = bindings
        .iter()
        .map(|binding| binding.namespace.as_str())
        .filter(|namespace| !namespace.is_empty())
        .collect();

    let imports: Vec<TokenStream> = namespaces
        .iter()
        .map(|namespace| {
            let path = parse_path(namespace)?;
            Ok(quote! { use #path::*; })
        })
        .collect::<Result<_>>()?;

    let statements: Vec<TokenStream> = bindings
        .iter()
        .map(|binding| {
            let interface = parse_ident(&binding.interface_name)?;
            let module = parse_ident(&binding.proxy_module())?;
            let proxy = parse_ident(&binding.proxy_name())?;
            Ok(quote! {
                services.add_scoped::<dyn #interface, super::#module::#proxy>(
                    super::#module::#proxy::new,
                    super::#module::#proxy::into_interface,
                );
            })
        })
        .collect::<Result<_>>()?;

    let output = quote! {
        //! Auto-generated registration of module proxies. Do not edit manually.
        //!
        //! Generated by modbind-build.

        #![allow(unused_imports)]

        #(#imports)*

        /// Register every generated proxy with a scoped lifetime.
        ///
        /// Each scope gets its own proxy instance, and with it its own module load.
        pub fn #function(services: &mut ::modbind::ServiceCollection) -> &mut ::modbind::ServiceCollection {
            #(#statements)*
            services
        }
    };

    let syntax_tree = syn::parse2(output).context("Failed to parse generated registration")?;
    Ok(prettyplease::unparse(&syntax_tree))
}
