//! Runtime support for proxies generated by `modbind-build`.
//!
//! A bound trait declares the script module and exports it talks to:
//!
//! ```ignore
//! use modbind::{InteropResult, JsInterop, async_trait, js_export, js_module, js_name};
//!
//! #[js_module("./js/utilities.js")]
//! #[js_export("Utilities")]
//! #[async_trait]
//! pub trait IUtilitiesInterop: JsInterop {
//!     #[js_name("focus")]
//!     async fn focus_async(&self, id: String, selector: String) -> InteropResult<()>;
//! }
//! ```
//!
//! The build script turns it into a `UtilitiesInterop` proxy plus an
//! `add_module_proxies` function registering it with a [`ServiceCollection`].
//! At runtime, each [`ServiceScope`] hands out proxies backed by its
//! [`ModuleRuntime`].

pub mod errors;
pub mod module;
pub mod runtime;
pub mod services;

pub use errors::*;
pub use module::LazyModule;
pub use runtime::{JsInterop, ModuleHandle, ModuleRuntime, invoke_as, to_arg};
pub use services::{AsyncDispose, ServiceCollection, ServiceProvider, ServiceScope};

pub use modbind_macros::{js_default_export, js_export, js_module, js_name};

// Re-exported so generated code and bound traits need no direct dependency
pub use async_trait::async_trait;
pub use serde_json::Value;
