//! Bound traits whose proxies are generated by `build.rs` and compiled here.

pub mod generated;
pub mod interop;
pub mod types;
