pub mod focus;
pub mod skipped;
pub mod text;
pub mod utilities;
