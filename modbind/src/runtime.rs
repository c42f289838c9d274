//! The surface generated proxies call against.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{InteropError, InteropResult};

/// Marker for traits bound to a script module.
///
/// Bound traits list it as a supertrait so their trait objects can be shared
/// across tasks.
pub trait JsInterop: Send + Sync {}

/// Opaque reference to a module loaded by a [`ModuleRuntime`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleHandle {
    id: u64,
    path: Arc<str>,
}

impl ModuleHandle {
    pub fn new(id: u64, path: impl Into<Arc<str>>) -> Self {
        Self { id, path: path.into() }
    }

    /// Runtime-assigned identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The module path the handle was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.path, self.id)
    }
}

/// A host able to load script modules and call their exports.
///
/// `path` arguments of [`invoke`](Self::invoke) and
/// [`invoke_void`](Self::invoke_void) are dotted export paths such as
/// `Utilities.focus` or `default.focus`.
#[async_trait]
pub trait ModuleRuntime: Send + Sync {
    async fn load_module(&self, path: &str) -> InteropResult<ModuleHandle>;

    async fn invoke(&self, module: &ModuleHandle, path: &str, args: Vec<Value>) -> InteropResult<Value>;

    async fn invoke_void(&self, module: &ModuleHandle, path: &str, args: Vec<Value>) -> InteropResult<()>;

    async fn release(&self, module: &ModuleHandle) -> InteropResult<()>;
}

/// Invoke an export and deserialize its result as `T`.
pub async fn invoke_as<T>(
    runtime: &dyn ModuleRuntime,
    module: &ModuleHandle,
    path: &str,
    args: Vec<Value>,
) -> InteropResult<T>
where
    T: DeserializeOwned,
{
    let value = runtime.invoke(module, path, args).await?;
    serde_json::from_value(value).map_err(|source| InteropError::Deserialize {
        path: path.to_string(),
        source,
    })
}

/// Convert a member argument into its wire value.
pub fn to_arg<T>(value: &T) -> InteropResult<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map_err(InteropError::Serialize)
}
