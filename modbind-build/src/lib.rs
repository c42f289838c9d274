//! Build-time generator for typed script-module proxies.
//!
//! This crate scans your source files for traits marked with
//! `#[js_module("...")]` and generates, for each one, a proxy struct that
//! implements the trait by invoking the module's exports, plus a single
//! registration function that adds every proxy to a
//! `modbind::ServiceCollection`.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     modbind_build::generate_proxies()
//!         .scan_path("src/")
//!         .output_dir("src/generated")
//!         .run()
//!         .expect("Failed to generate module proxies");
//!
//!     println!("cargo:rerun-if-changed=src/");
//! }
//! ```
//!
//! The compiler itself is a pure function over [`ModuleBinding`]s, so
//! bindings can also be built by hand and passed to [`compile`].

mod compile;
mod generator;
mod model;
mod naming;
mod proxy;
mod registration;
mod scanner;
mod skip;
mod tokens;

pub use compile::{Artifact, CompileOptions, Compilation, DEFAULT_REGISTRATION_FN, REGISTRATION_MODULE, compile};
pub use generator::{GenerationReport, ProxyGenerator};
pub use model::{DEFAULT_EXPORT, MemberBinding, ModuleBinding, Parameter};
pub use naming::{proxy_type_name, to_snake_case};
pub use proxy::render_proxy;
pub use registration::render_registration;
pub use scanner::{Extraction, extract_file, scan_directory, scan_file};
pub use skip::{SkipReason, Skipped};

/// Create a new proxy generator with default settings.
///
/// # Example
///
/// ```ignore
/// modbind_build::generate_proxies()
///     .scan_path("src/")
///     .output_dir("src/generated")
///     .run()
///     .expect("Failed to generate module proxies");
/// ```
pub fn generate_proxies() -> ProxyGenerator {
    ProxyGenerator::new()
}
