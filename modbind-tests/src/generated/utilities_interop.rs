//! Auto-generated proxy for `IUtilitiesInterop` backed by `./js/utilities.js`. Do not edit manually.
//!
//! Generated by modbind-build.
#![allow(unused_imports)]
use crate::interop::utilities::*;
use modbind::{InteropResult, JsInterop, async_trait, js_export, js_module, js_name};
use crate::types::DomRect;
/// Implements [`IUtilitiesInterop`] by calling into `./js/utilities.js`.
pub struct UtilitiesInterop {
    runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>,
    module: ::modbind::LazyModule,
}
impl UtilitiesInterop {
    /// Script module loaded on first use.
    pub const MODULE_PATH: &'static str = "./js/utilities.js";
    pub fn new(runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>) -> Self {
        Self {
            runtime,
            module: ::modbind::LazyModule::new(Self::MODULE_PATH),
        }
    }
    pub fn into_interface(
        self: ::std::sync::Arc<Self>,
    ) -> ::std::sync::Arc<dyn IUtilitiesInterop> {
        self
    }
}
impl ::modbind::JsInterop for UtilitiesInterop {}
#[::modbind::async_trait]
impl IUtilitiesInterop for UtilitiesInterop {
    async fn focus_async(
        &self,
        id: String,
        selector: String,
    ) -> ::modbind::InteropResult<()> {
        let __module = self.module.get(&*self.runtime).await?;
        let __args: ::std::vec::Vec<::modbind::Value> = ::std::vec::Vec::from([
            ::modbind::to_arg(&id)?,
            ::modbind::to_arg(&selector)?,
        ]);
        self.runtime.invoke_void(__module, "Utilities.focus", __args).await
    }
    async fn get_rect_async(
        &self,
        id: String,
    ) -> ::modbind::InteropResult<Option<DomRect>> {
        let __module = self.module.get(&*self.runtime).await?;
        let __args: ::std::vec::Vec<::modbind::Value> = ::std::vec::Vec::from([
            ::modbind::to_arg(&id)?,
        ]);
        ::modbind::invoke_as::<
            Option<DomRect>,
        >(&*self.runtime, __module, "Utilities.getRect", __args)
            .await
    }
}
#[::modbind::async_trait]
impl ::modbind::AsyncDispose for UtilitiesInterop {
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
