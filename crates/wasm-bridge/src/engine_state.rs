use param_engine::{DeclarationError, GenerationError, Session};
use scad_models::DEFAULT_MODEL;
use tracing::info;

use crate::form::FormState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Model opened when `Initialize` names none.
    pub default_model: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no model loaded; send Initialize first")]
    NotInitialized,
    #[error("unknown model: {name}")]
    UnknownModel { name: String },
    #[error("unknown field: {name}")]
    UnknownField { name: String },
    #[error("generate is disabled until the parameters change")]
    GenerateDisabled,
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything the bridge keeps between messages.
#[derive(Default)]
pub struct BridgeState {
    pub config: BridgeConfig,
    form: Option<FormState>,
}

impl BridgeState {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config, form: None }
    }

    /// Open a form for `model`, or the configured default.
    ///
    /// Replaces any form that was open before.
    pub fn open(&mut self, model: Option<&str>) -> Result<&FormState, BridgeError> {
        let name = model.unwrap_or(self.config.default_model.as_str());
        let generator = scad_models::find(name).ok_or_else(|| BridgeError::UnknownModel {
            name: name.to_string(),
        })?;
        let session = Session::from_shared(generator)?;
        info!(model = session.name(), "form opened");
        Ok(self.form.insert(FormState::new(session)))
    }

    pub fn form(&self) -> Result<&FormState, BridgeError> {
        self.form.as_ref().ok_or(BridgeError::NotInitialized)
    }

    pub fn form_mut(&mut self) -> Result<&mut FormState, BridgeError> {
        self.form.as_mut().ok_or(BridgeError::NotInitialized)
    }
}
