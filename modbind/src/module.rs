use tokio::sync::OnceCell;

use crate::errors::InteropResult;
use crate::runtime::{ModuleHandle, ModuleRuntime};

/// A script module loaded at most once, on first use.
///
/// Concurrent first callers share a single load: one performs it and the
/// others await its outcome. A failed load leaves the cell empty, so the next
/// call tries again.
#[derive(Debug)]
pub struct LazyModule {
    path: String,
    handle: OnceCell<ModuleHandle>,
}

impl LazyModule {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handle: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Return the loaded module, loading it through `runtime` if needed.
    pub async fn get(&self, runtime: &dyn ModuleRuntime) -> InteropResult<&ModuleHandle> {
        self.handle
            .get_or_try_init(|| async {
                log::debug!("loading script module {}", self.path);
                runtime
                    .load_module(&self.path)
                    .await
                    .inspect(|handle| log::debug!("loaded script module {handle}"))
            })
            .await
    }

    /// The module handle, if a load has completed.
    pub fn loaded(&self) -> Option<&ModuleHandle> {
        self.handle.get()
    }
}
