use tracing::warn;

use crate::engine_state::{BridgeError, BridgeState};
use crate::messages::{EngineToUi, UiToEngine};

/// Handle one UI message. Never fails: errors come back as
/// [`EngineToUi::Error`].
pub fn dispatch(state: &mut BridgeState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "bridge message failed");
            EngineToUi::Error {
                message: e.to_string(),
            }
        }
    }
}

fn handle_message(state: &mut BridgeState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        UiToEngine::Initialize { model } => {
            let form = state.open(model.as_deref())?;
            Ok(EngineToUi::FormReady {
                model: form.session().name().to_string(),
                controls: form.controls(),
                status: form.status(),
            })
        }
        UiToEngine::FieldChanged { name, value } => {
            let status = state.form_mut()?.on_field_changed(&name, value)?;
            Ok(EngineToUi::StatusChanged { status })
        }
        UiToEngine::Generate => {
            let artifacts = state.form_mut()?.generate()?;
            Ok(EngineToUi::ArtifactsReady { artifacts })
        }
        UiToEngine::ListModels => Ok(EngineToUi::Models {
            names: scad_models::names(),
        }),
    }
}

/// JSON in, JSON out. Input that does not parse is reported as an
/// `Error` message rather than a failure.
pub fn dispatch_json(state: &mut BridgeState, json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToEngine>(json_input) {
        Ok(msg) => dispatch(state, msg),
        Err(e) => EngineToUi::Error {
            message: BridgeError::from(e).to_string(),
        },
    };
    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"failed to serialize response: {e}"}}"#)
    })
}
