//! Traits no proxy can implement. They must not reach the generated code.

use modbind::{InteropResult, JsInterop, async_trait, js_module};

#[allow(dead_code)]
#[js_module("./js/private.js")]
#[async_trait]
trait IPrivateInterop: JsInterop {
    async fn ping(&self) -> InteropResult<()>;
}

#[js_module("./js/limits.js")]
#[async_trait]
pub trait ILimitsInterop: JsInterop {
    const LIMIT: usize;

    async fn ping(&self) -> InteropResult<()>;
}

#[js_module("./js/counter.js")]
#[async_trait]
pub trait ICounterInterop: JsInterop {
    async fn increment(&self) -> InteropResult<()>;

    fn count(&self) -> u32;
}
