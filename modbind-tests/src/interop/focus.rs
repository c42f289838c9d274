use modbind::{InteropResult, JsInterop, js_default_export, js_export, js_module, js_name};

// No `#[async_trait]` here; `#[js_module]` supplies it.
#[js_module("./js/focus.js")]
#[js_export("Focus")]
#[js_default_export]
pub trait IFocusInterop: JsInterop {
    #[js_name("focus")]
    async fn focus(&self) -> InteropResult<()>;
}
