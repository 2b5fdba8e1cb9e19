use param_types::{Artifact, RawValue};
use serde::{Deserialize, Serialize};

use crate::form::{FormControl, FormStatus};

/// Messages from the UI to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    /// Open the form for a model; `None` opens the configured default.
    Initialize {
        #[serde(default)]
        model: Option<String>,
    },
    FieldChanged {
        name: String,
        value: RawValue,
    },
    Generate,
    ListModels,
}

/// Messages from the engine to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    FormReady {
        model: String,
        controls: Vec<FormControl>,
        status: FormStatus,
    },
    StatusChanged {
        status: FormStatus,
    },
    ArtifactsReady {
        artifacts: Vec<Artifact>,
    },
    Models {
        names: Vec<String>,
    },
    Error {
        message: String,
    },
}
