use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomRect {
    pub width: f64,
    pub height: f64,
}
