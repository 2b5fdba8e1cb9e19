use param_engine::{ErrorKind, GenerationError, Session};
use param_types::{Artifact, NumericKind, Parameter, RawValue, RawValues};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine_state::BridgeError;

/// One option of a choice group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// DOM id for the radio input, `parameter-<name>-<choice>`.
    pub id: String,
    pub value: String,
}

/// What the UI should render for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control")]
pub enum FormControl {
    NumberInput {
        name: String,
        description: String,
        /// `"1"` for integers, `"any"` for reals; used as the input's `step`.
        step: String,
        value: RawValue,
    },
    ChoiceGroup {
        name: String,
        description: String,
        options: Vec<ChoiceOption>,
        selected: Option<String>,
    },
}

impl FormControl {
    pub fn for_parameter(parameter: &Parameter, current: Option<&RawValue>) -> Self {
        match parameter {
            Parameter::Numeric(p) => FormControl::NumberInput {
                name: p.name.clone(),
                description: p.description.clone(),
                step: match p.kind {
                    NumericKind::Integer => "1".to_string(),
                    NumericKind::Real => "any".to_string(),
                },
                value: current.cloned().unwrap_or(RawValue::Unset),
            },
            Parameter::Choice(p) => FormControl::ChoiceGroup {
                name: p.name.clone(),
                description: p.description.clone(),
                options: p
                    .choices
                    .iter()
                    .map(|choice| ChoiceOption {
                        id: format!("parameter-{}-{}", p.name, choice),
                        value: choice.clone(),
                    })
                    .collect(),
                selected: match current {
                    Some(RawValue::Text(s)) if p.contains(s) => Some(s.clone()),
                    _ => None,
                },
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormControl::NumberInput { name, .. } | FormControl::ChoiceGroup { name, .. } => name,
        }
    }
}

/// The error shown in the form's status area.
///
/// Same shape for every kind of failure; `parameters` lets the UI mark
/// the offending fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub parameters: Vec<String>,
    pub message: String,
}

impl From<&GenerationError> for Diagnostic {
    fn from(e: &GenerationError) -> Self {
        Self {
            kind: e.kind(),
            parameters: e.parameters(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    pub diagnostic: Option<Diagnostic>,
    pub generate_enabled: bool,
}

/// State behind one parameter form.
///
/// Every field change re-runs validation and the generator, so domain
/// rejections show up while typing, not only on "generate". The generate
/// action stays disabled while anything is unset or invalid, and again after
/// each successful generation until the next change.
pub struct FormState {
    session: Session,
    values: RawValues,
    diagnostic: Option<Diagnostic>,
    generate_enabled: bool,
    displayed: Vec<Artifact>,
}

impl FormState {
    /// Start a form with every field set to its declared default.
    pub fn new(session: Session) -> Self {
        let values = session.defaults();
        let mut form = Self {
            session,
            values,
            diagnostic: None,
            generate_enabled: false,
            displayed: Vec::new(),
        };
        form.revalidate();
        form
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn values(&self) -> &RawValues {
        &self.values
    }

    /// Controls in parameter declaration order.
    pub fn controls(&self) -> Vec<FormControl> {
        self.session
            .parameters()
            .iter()
            .map(|p| FormControl::for_parameter(p, self.values.get(p.name())))
            .collect()
    }

    pub fn status(&self) -> FormStatus {
        FormStatus {
            diagnostic: self.diagnostic.clone(),
            generate_enabled: self.generate_enabled,
        }
    }

    /// Artifacts currently on display, in first-seen order.
    pub fn displayed(&self) -> &[Artifact] {
        &self.displayed
    }

    /// Handle one field change from the UI.
    pub fn on_field_changed(&mut self, name: &str, value: RawValue) -> Result<FormStatus, BridgeError> {
        if self.session.parameter(name).is_none() {
            return Err(BridgeError::UnknownField {
                name: name.to_string(),
            });
        }
        debug!(name, %value, "field changed");
        self.values.insert(name, value);
        self.revalidate();
        Ok(self.status())
    }

    /// Run the generator for the current values and put the result on display.
    ///
    /// Artifacts replace displayed ones with the same name; others are kept.
    pub fn generate(&mut self) -> Result<Vec<Artifact>, BridgeError> {
        if !self.generate_enabled {
            return Err(BridgeError::GenerateDisabled);
        }
        self.generate_enabled = false;

        let artifacts = match self.session.generate(&self.values) {
            Ok(artifacts) => artifacts,
            Err(e) => {
                self.diagnostic = Some(Diagnostic::from(&e));
                return Err(e.into());
            }
        };

        for artifact in &artifacts {
            match self.displayed.iter_mut().find(|a| a.name == artifact.name) {
                Some(slot) => *slot = artifact.clone(),
                None => self.displayed.push(artifact.clone()),
            }
        }
        Ok(artifacts)
    }

    fn revalidate(&mut self) {
        match self.session.generate(&self.values) {
            Ok(_) => {
                self.diagnostic = None;
                self.generate_enabled = true;
            }
            Err(e) => {
                debug!(error = %e, "form input rejected");
                self.diagnostic = Some(Diagnostic::from(&e));
                self.generate_enabled = false;
            }
        }
    }
}
