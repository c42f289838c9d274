//! Entry point turning bindings into named source artifacts.

use crate::model::ModuleBinding;
use crate::proxy::render_proxy;
use crate::registration::render_registration;
use crate::skip::{SkipReason, Skipped};
use anyhow::{Context, Result};
use std::collections::HashSet;

/// Module name of the registration artifact.
pub const REGISTRATION_MODULE: &str = "registration";

/// Default name of the generated registration function.
pub const DEFAULT_REGISTRATION_FN: &str = "add_module_proxies";

#[derive(Debug, Clone)]
pub struct CompileOptions {
    registration_fn: String,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self {
            registration_fn: DEFAULT_REGISTRATION_FN.to_string(),
        }
    }

    /// Set the name of the generated registration function.
    ///
    /// Default: `add_module_proxies`
    pub fn registration_fn(mut self, name: impl Into<String>) -> Self {
        self.registration_fn = name.into();
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A named source file produced by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name, e.g. `utilities_interop.rs`
    pub name: String,
    pub contents: String,
}

impl Artifact {
    /// The Rust module this artifact becomes.
    pub fn module_name(&self) -> &str {
        self.name.strip_suffix(".rs").unwrap_or(&self.name)
    }
}

#[derive(Debug, Default)]
pub struct Compilation {
    /// Proxy artifacts in input order, then the registration artifact.
    pub artifacts: Vec<Artifact>,
    pub skipped: Vec<Skipped>,
}

impl Compilation {
    pub fn proxy_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.module_name() != REGISTRATION_MODULE)
            .count()
    }
}

/// Compile bindings into one proxy artifact each plus one registration artifact.
///
/// Output depends only on the input: the same bindings always render the
/// same bytes. When no proxy is produced, no artifact is produced at all.
pub fn compile(bindings: &[ModuleBinding], options: &CompileOptions) -> Result<Compilation> {
    let mut compilation = Compilation::default();
    let mut modules = HashSet::new();
    let mut emitted = Vec::with_capacity(bindings.len());

    for binding in bindings {
        if binding.members.is_empty() {
            compilation
                .skipped
                .push(Skipped::interface(&binding.interface_name, SkipReason::NoMembers));
            continue;
        }

        let module = binding.proxy_module();
        if module == REGISTRATION_MODULE || !modules.insert(module.clone()) {
            compilation.skipped.push(Skipped::interface(
                &binding.interface_name,
                SkipReason::DuplicateProxy {
                    proxy: binding.proxy_name(),
                },
            ));
            continue;
        }

        let contents = render_proxy(binding)
            .with_context(|| format!("Failed to render proxy for {}", binding.interface_name))?;
        compilation.artifacts.push(Artifact {
            name: format!("{module}.rs"),
            contents,
        });
        emitted.push(binding);
    }

    if emitted.is_empty() {
        return Ok(compilation);
    }

    let contents = render_registration(&emitted, &options.registration_fn)?;
    compilation.artifacts.push(Artifact {
        name: format!("{REGISTRATION_MODULE}.rs"),
        contents,
    });

    Ok(compilation)
}
