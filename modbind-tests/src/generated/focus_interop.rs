//! Auto-generated proxy for `IFocusInterop` backed by `./js/focus.js`. Do not edit manually.
//!
//! Generated by modbind-build.
#![allow(unused_imports)]
use crate::interop::focus::*;
use modbind::{
    InteropResult, JsInterop, js_default_export, js_export, js_module, js_name,
};
/// Implements [`IFocusInterop`] by calling into `./js/focus.js`.
pub struct FocusInterop {
    runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>,
    module: ::modbind::LazyModule,
}
impl FocusInterop {
    /// Script module loaded on first use.
    pub const MODULE_PATH: &'static str = "./js/focus.js";
    pub fn new(runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>) -> Self {
        Self {
            runtime,
            module: ::modbind::LazyModule::new(Self::MODULE_PATH),
        }
    }
    pub fn into_interface(
        self: ::std::sync::Arc<Self>,
    ) -> ::std::sync::Arc<dyn IFocusInterop> {
        self
    }
}
impl ::modbind::JsInterop for FocusInterop {}
#[::modbind::async_trait]
impl IFocusInterop for FocusInterop {
    async fn focus(&self) -> ::modbind::InteropResult<()> {
        let __module = self.module.get(&*self.runtime).await?;
        let __args: ::std::vec::Vec<::modbind::Value> = ::std::vec::Vec::from([]);
        self.runtime.invoke_void(__module, "default.focus", __args).await
    }
}
#[::modbind::async_trait]
impl ::modbind::AsyncDispose for FocusInterop {
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
