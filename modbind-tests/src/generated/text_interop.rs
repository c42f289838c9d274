//! Auto-generated proxy for `ITextInterop` backed by `./js/text.js`. Do not edit manually.
//!
//! Generated by modbind-build.
#![allow(unused_imports)]
use crate::interop::text::*;
use modbind::{InteropResult, JsInterop, async_trait, js_module};
use crate::interop::text::options::Alignment;
/// Implements [`ITextInterop`] by calling into `./js/text.js`.
pub struct TextInterop {
    runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>,
    module: ::modbind::LazyModule,
}
impl TextInterop {
    /// Script module loaded on first use.
    pub const MODULE_PATH: &'static str = "./js/text.js";
    pub fn new(runtime: ::std::sync::Arc<dyn ::modbind::ModuleRuntime>) -> Self {
        Self {
            runtime,
            module: ::modbind::LazyModule::new(Self::MODULE_PATH),
        }
    }
    pub fn into_interface(
        self: ::std::sync::Arc<Self>,
    ) -> ::std::sync::Arc<dyn ITextInterop> {
        self
    }
}
impl ::modbind::JsInterop for TextInterop {}
#[::modbind::async_trait]
impl ITextInterop for TextInterop {
    async fn measure(&self, text: &str, font: &str) -> ::modbind::InteropResult<f64> {
        let __module = self.module.get(&*self.runtime).await?;
        let __args: ::std::vec::Vec<::modbind::Value> = ::std::vec::Vec::from([
            ::modbind::to_arg(&text)?,
            ::modbind::to_arg(&font)?,
        ]);
        ::modbind::invoke_as::<f64>(&*self.runtime, __module, "measure", __args).await
    }
    async fn align(
        &self,
        selector: &str,
        alignment: Alignment,
    ) -> ::modbind::InteropResult<()> {
        let __module = self.module.get(&*self.runtime).await?;
        let __args: ::std::vec::Vec<::modbind::Value> = ::std::vec::Vec::from([
            ::modbind::to_arg(&selector)?,
            ::modbind::to_arg(&alignment)?,
        ]);
        self.runtime.invoke_void(__module, "align", __args).await
    }
}
#[::modbind::async_trait]
impl ::modbind::AsyncDispose for TextInterop {
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
