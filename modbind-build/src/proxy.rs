//! Proxy compiler: renders one binding into a proxy type.
//!
//! The generated proxy owns a `modbind::LazyModule` that loads the script
//! module on first use, implements the bound trait by
//! invoking `<export>.<wire name>` on that module, and releases the module on
//! disposal.

use crate::model::{MemberBinding, ModuleBinding};
use crate::tokens::{parse_ident, parse_path, parse_type};
use anyhow::{Context, Result};
use proc_macro2::TokenStream;
use quote::quote;

/// Render the complete source of the proxy module for `binding`.
pub fn render_proxy(binding: &ModuleBinding) -> Result<String> {
    let proxy_ident = parse_ident(&binding.proxy_name())?;
    let interface_ident = parse_ident(&binding.interface_name)?;
    let module_path = &binding.module_path;

    let namespace_import = if binding.namespace.is_empty() {
        None
    } else {
        let namespace = parse_path(&binding.namespace)?;
        Some(quote! { use #namespace::*; })
    };

    let imports: Vec<syn::ItemUse> = binding
        .imports
        .iter()
        .map(|import| syn::parse_str(import).with_context(|| format!("`{import}` is not a use declaration")))
        .collect::<Result<_>>()?;

    let methods: Vec<TokenStream> = binding
        .members
        .iter()
        .map(|member| render_member(binding, member))
        .collect::<Result<_>>()?;

    let header = format!(
        " Auto-generated proxy for `{}` backed by `{}`. Do not edit manually.",
        binding.interface_name, binding.module_path
    );
    let struct_doc = format!(" Implements [`{}`] by calling into `{}`.", binding.interface_name, binding.module_path);

    let output = quote! {
        #![doc = #header]
        //!
        //! Generated by modbind-build.

        #![allow(unused_imports)]

        #namespace_import
        #(#imports)*

        #[doc = #struct_doc]
        pub struct #proxy_ident {
            runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>,
            module: ::modbind::LazyModule,
        }

        impl #proxy_ident {
            /// Script module loaded on first use.
            pub const MODULE_PATH: &'static str = #module_path;

            pub fn new(runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>) -> Self {
                Self {
                    runtime,
                    module: ::modbind::LazyModule::new(Self::MODULE_PATH),
                }
            }

            pub fn into_interface(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<dyn #interface_ident> {
                self
            }
        }

        impl ::modbind::JsInterop for #proxy_ident {}

        #[::modbind::async_trait]
        impl #interface_ident for #proxy_ident {
            #(#methods)*
        }

        #[::modbind::async_trait]
        impl ::modbind::AsyncDispose for #proxy_ident {
            async fn dispose(&self) -> ::modbind::InteropResult<()> {
                if let Some(module) = self.module.loaded() {
                    match self.runtime.release(module).await {
                        Err(::modbind::InteropError::Disconnected { .. }) => {}
                        result => return result,
                    }
                }
                Ok(())
            }
        }
    };

    let syntax_tree = syn::parse2(output).context("Failed to parse generated proxy")?;
    Ok(prettyplease::unparse(&syntax_tree))
}

fn render_member(binding: &ModuleBinding, member: &MemberBinding) -> Result<TokenStream> {
    let method = parse_ident(&member.name)?;
    let invocation_path = binding.invocation_path(member);

    let mut inputs = Vec::with_capacity(member.parameters.len());
    let mut args = Vec::with_capacity(member.parameters.len());
    for parameter in &member.parameters {
        let name = parse_ident(&parameter.name)?;
        let ty = parse_type(&parameter.type_name)?;
        inputs.push(quote! { #name: #ty });
        args.push(quote! { ::modbind::to_arg(&#name)? });
    }

    let (output, call) = match &member.result_shape {
        Some(shape) => {
            let shape = parse_type(shape)?;
            (
                quote! { ::modbind::InteropResult<#shape> },
                quote! { ::modbind::invoke_as::<#shape>(&*self.runtime, __module, #invocation_path, __args).await },
            )
        }
        None => (
            quote! { ::modbind::InteropResult<()> },
            quote! { self.runtime.invoke_void(__module, #invocation_path, __args).await },
        ),
    };

    Ok(quote! {
        async fn #method(&self, #(#inputs),*) -> #output {
            let __module = self.module.get(&*self.runtime).await?;
            let __args: ::std::vec::Vec<::modbind::Value> = ::std::vec::Vec::from([#(#args),*]);
            #call
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{ImplItem, Item};

    fn utilities() -> ModuleBinding {
        ModuleBinding::new("IUtilitiesInterop", "crate::interop", "./js/utilities.js")
            .with_export("Utilities")
            .with_member(
                MemberBinding::new("focus_async")
                    .wire_name("focus")
                    .param("String", "id")
                    .param("String", "selector"),
            )
            .with_member(
                MemberBinding::new("get_rect_async")
                    .wire_name("getRect")
                    .returns("Option<DomRect>")
                    .param("String", "id"),
            )
    }

    /// Methods of the `impl <interface> for <proxy>` block.
    fn interface_methods(source: &str, interface: &str) -> Vec<String> {
        let file = syn::parse_file(source).unwrap();
        file.items
            .iter()
            .find_map(|item| match item {
                Item::Impl(item_impl)
                    if item_impl
                        .trait_
                        .as_ref()
                        .is_some_and(|(_, path, _)| path.is_ident(interface)) =>
                {
                    Some(
                        item_impl
                            .items
                            .iter()
                            .filter_map(|item| match item {
                                ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
                                _ => None,
                            })
                            .collect(),
                    )
                }
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_render_utilities_proxy() {
        let source = render_proxy(&utilities()).unwrap();

        assert!(source.contains("pub struct UtilitiesInterop"));
        assert!(source.contains("use crate::interop::*;"));
        assert!(source.contains("pub const MODULE_PATH: &'static str = \"./js/utilities.js\";"));
        assert!(source.contains("impl IUtilitiesInterop for UtilitiesInterop"));
        assert!(source.contains("\"Utilities.focus\""));
        assert!(source.contains("\"Utilities.getRect\""));
        assert!(source.contains("invoke_void(__module, \"Utilities.focus\", __args)"));
        assert!(source.contains("invoke_as::<Option<DomRect>>"));
        assert!(source.contains("::modbind::InteropResult<Option<DomRect>>"));
        assert!(source.contains("::modbind::to_arg(&selector)?"));
        assert!(source.contains("InteropError::Disconnected"));

        assert_eq!(
            interface_methods(&source, "IUtilitiesInterop"),
            ["focus_async", "get_rect_async"]
        );
    }

    #[test]
    fn test_arguments_keep_declared_order() {
        let source = render_proxy(&utilities()).unwrap();
        let id = source.find("to_arg(&id)").unwrap();
        let selector = source.find("to_arg(&selector)").unwrap();
        assert!(id < selector);
    }

    #[test]
    fn test_default_export_path() {
        let binding = ModuleBinding::new("IFocus", "", "./focus.js")
            .with_export("Ignored")
            .with_default_export()
            .with_member(MemberBinding::new("focus_async").wire_name("focus"));
        let source = render_proxy(&binding).unwrap();

        assert!(source.contains("\"default.focus\""));
        assert!(!source.contains("Ignored"));
        assert!(!source.contains("use crate"));
    }

    #[test]
    fn test_bare_wire_name_without_prefix() {
        let binding = ModuleBinding::new("IBare", "crate", "./bare.js")
            .with_member(MemberBinding::new("ping").wire_name("foo").returns("u32"));
        let source = render_proxy(&binding).unwrap();

        assert!(source.contains("\"foo\""));
        assert!(!source.contains("\".foo\""));
    }

    #[test]
    fn test_imports_are_forwarded() {
        let binding = ModuleBinding::new("IDom", "crate::dom", "./dom.js")
            .with_import("use crate::types::DomRect;")
            .with_member(MemberBinding::new("rect").returns("DomRect"));
        let source = render_proxy(&binding).unwrap();

        assert!(source.contains("use crate::types::DomRect;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_proxy(&utilities()).unwrap(), render_proxy(&utilities()).unwrap());
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let binding = ModuleBinding::new("IBroken", "crate", "./broken.js")
            .with_member(MemberBinding::new("run").returns("Option<"));
        assert!(render_proxy(&binding).is_err());
    }
}
