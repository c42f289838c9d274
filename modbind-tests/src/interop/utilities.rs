use modbind::{InteropResult, JsInterop, async_trait, js_export, js_module, js_name};

use super::super::types::DomRect;

#[js_module("./js/utilities.js")]
#[js_export("Utilities")]
#[async_trait]
pub trait IUtilitiesInterop: JsInterop {
    #[js_name("focus")]
    async fn focus_async(&self, id: String, selector: String) -> InteropResult<()>;

    #[js_name("getRect")]
    async fn get_rect_async(&self, id: String) -> InteropResult<Option<DomRect>>;

    fn describe(&self) -> &'static str {
        "utilities"
    }
}
