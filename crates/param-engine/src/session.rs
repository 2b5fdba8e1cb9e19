use std::sync::Arc;

use param_types::{Arguments, Artifact, Parameter, RawValues};
use tracing::debug;

use crate::errors::{DeclarationError, GenerationError, InputError};
use crate::generator::{invoke, Generator, SharedGenerator};
use crate::reflect::reflect;

/// One generator together with the descriptors reflected from it.
///
/// Reflection happens once, in [`Session::new`]; the descriptors are never
/// changed afterwards. A session is cheap to clone and can be shared.
#[derive(Clone)]
pub struct Session {
    generator: SharedGenerator,
    parameters: Arc<[Parameter]>,
}

impl Session {
    pub fn new<G>(generator: G) -> Result<Self, DeclarationError>
    where
        G: Generator + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(generator))
    }

    pub fn from_shared(generator: SharedGenerator) -> Result<Self, DeclarationError> {
        let parameters = reflect(&generator.signature())?;
        debug!(
            generator = generator.name(),
            parameters = parameters.len(),
            "session started"
        );
        Ok(Self {
            generator,
            parameters: parameters.into(),
        })
    }

    pub fn name(&self) -> &str {
        self.generator.name()
    }

    /// Descriptors in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Raw values for every parameter that declares a default.
    pub fn defaults(&self) -> RawValues {
        RawValues::from_defaults(&self.parameters)
    }

    pub fn validate(&self, raw: &RawValues) -> Result<Arguments, InputError> {
        crate::validate::validate(&self.parameters, raw)
    }

    /// Validate `raw` and, if it is complete and well-typed, run the generator.
    pub fn generate(&self, raw: &RawValues) -> Result<Vec<Artifact>, GenerationError> {
        let arguments = self.validate(raw)?;
        invoke(&self.generator, arguments)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("generator", &self.generator.name())
            .field("parameters", &self.parameters)
            .finish()
    }
}
