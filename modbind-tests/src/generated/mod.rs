//! Auto-generated module. Do not edit manually.

pub mod focus_interop;
pub mod text_interop;
pub mod utilities_interop;
pub mod registration;

pub use focus_interop::*;
pub use text_interop::*;
pub use utilities_interop::*;
pub use registration::*;
