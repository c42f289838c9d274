use modbind::{InteropResult, JsInterop, async_trait, js_module};

use self::options::Alignment;

pub mod options {
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Alignment {
        Left,
        Center,
        Right,
    }
}

#[js_module("./js/text.js")]
#[async_trait]
pub trait ITextInterop: JsInterop {
    async fn measure(&self, text: &str, font: &str) -> InteropResult<f64>;

    async fn align(&self, selector: &str, alignment: Alignment) -> InteropResult<()>;
}
