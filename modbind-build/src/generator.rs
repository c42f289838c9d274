//! Build-script driver: scan, compile, and write the generated modules.

use crate::compile::{CompileOptions, compile};
use crate::scanner::{Extraction, scan_directory};
use crate::skip::Skipped;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for configuring and running the proxy generator.
pub struct ProxyGenerator {
    scan_paths: Vec<PathBuf>,
    output_dir: PathBuf,
    crate_name: String,
    options: CompileOptions,
    cargo_warnings: bool,
}

/// What a generator run produced.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Every generated file, including `mod.rs`.
    pub files: Vec<PathBuf>,
    /// Files whose content changed and were rewritten.
    pub written: Vec<PathBuf>,
    pub proxy_count: usize,
    pub skipped: Vec<Skipped>,
}

impl ProxyGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            scan_paths: Vec::new(),
            output_dir: PathBuf::from("src/generated"),
            crate_name: "crate".to_string(),
            options: CompileOptions::new(),
            cargo_warnings: true,
        }
    }

    /// Add a path to scan for `#[js_module]` traits.
    ///
    /// Can be called multiple times to scan multiple directories.
    pub fn scan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scan_paths.push(path.into());
        self
    }

    /// Set the directory the generated modules are written to.
    ///
    /// Default: `src/generated`
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the crate name used as the root of trait module paths.
    ///
    /// Default: `crate`
    pub fn crate_name(mut self, name: impl Into<String>) -> Self {
        self.crate_name = name.into();
        self
    }

    /// Set the name of the generated registration function.
    ///
    /// Default: `add_module_proxies`
    pub fn registration_fn(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.registration_fn(name);
        self
    }

    /// Whether skipped traits and members are reported as `cargo:warning` lines.
    ///
    /// Default: `true`
    pub fn cargo_warnings(mut self, enabled: bool) -> Self {
        self.cargo_warnings = enabled;
        self
    }

    /// Run the generator.
    ///
    /// This scans all configured paths, compiles every bound trait, and writes
    /// one module per proxy, the registration module, and a `mod.rs` exposing
    /// them to the output directory.
    pub fn run(self) -> Result<GenerationReport> {
        // Default to scanning "src/" if no paths specified
        let scan_paths = if self.scan_paths.is_empty() {
            vec![PathBuf::from("src/")]
        } else {
            self.scan_paths
        };

        let mut extraction = Extraction::default();
        for path in &scan_paths {
            let found =
                scan_directory(path, &self.crate_name).with_context(|| format!("Failed to scan {}", path.display()))?;
            extraction.extend(found);
        }

        let compilation = compile(&extraction.bindings, &self.options)?;

        let mut report = GenerationReport {
            proxy_count: compilation.proxy_count(),
            ..GenerationReport::default()
        };
        report.skipped = extraction.skipped;
        report.skipped.extend(compilation.skipped);

        for skipped in &report.skipped {
            log::warn!("modbind-build: {skipped}");
            if self.cargo_warnings {
                println!("cargo:warning=modbind: {skipped}");
            }
        }

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create directory {}", self.output_dir.display()))?;

        for artifact in &compilation.artifacts {
            let path = self.output_dir.join(&artifact.name);
            if write_if_changed(&path, &artifact.contents)? {
                report.written.push(path.clone());
            }
            report.files.push(path);
        }

        let modules: Vec<&str> = compilation.artifacts.iter().map(|a| a.module_name()).collect();
        let mod_file = self.output_dir.join("mod.rs");
        if write_if_changed(&mod_file, &render_mod_file(&modules))? {
            report.written.push(mod_file.clone());
        }
        report.files.push(mod_file);

        log::info!(
            "modbind-build: {} proxies in {} ({} files rewritten)",
            report.proxy_count,
            self.output_dir.display(),
            report.written.len()
        );

        Ok(report)
    }
}

impl Default for ProxyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare and re-export every generated module.
fn render_mod_file(modules: &[&str]) -> String {
    let mut content = String::from("//! Auto-generated module. Do not edit manually.\n\n");
    for module in modules {
        content.push_str(&format!("pub mod {module};\n"));
    }
    if !modules.is_empty() {
        content.push('\n');
    }
    for module in modules {
        content.push_str(&format!("pub use {module}::*;\n"));
    }
    content
}

/// Only write if content has changed (avoids unnecessary recompilation).
fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    let should_write = match fs::read_to_string(path) {
        Ok(existing) => existing != contents,
        Err(_) => true,
    };

    if should_write {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(should_write)
}
