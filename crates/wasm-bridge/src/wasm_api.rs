//! JavaScript entry points. Only compiled for `wasm32`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::dispatch::dispatch_json;
use crate::engine_state::BridgeState;

thread_local! {
    static BRIDGE_STATE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

/// Call once when the module loads.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"openswebcad bridge ready".into());
}

/// Process one JSON-encoded `UiToEngine` message and return the JSON-encoded
/// `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    BRIDGE_STATE.with(|state| dispatch_json(&mut state.borrow_mut(), json_input))
}
