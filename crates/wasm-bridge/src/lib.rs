//! Bridge between the browser parameter form and the generators.
//!
//! The JavaScript side owns the DOM. It renders one control per
//! [`FormControl`], forwards every change as a JSON [`UiToEngine`] message
//! and shows whatever [`EngineToUi`] comes back. All validation and
//! generation happens here, through the same engine the CLI uses.
//!
//! [`UiToEngine`]: messages::UiToEngine
//! [`EngineToUi`]: messages::EngineToUi

pub mod dispatch;
pub mod engine_state;
pub mod form;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, dispatch_json};
pub use engine_state::{BridgeConfig, BridgeError, BridgeState};
pub use form::{ChoiceOption, Diagnostic, FormControl, FormState, FormStatus};
