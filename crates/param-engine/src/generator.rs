use std::sync::Arc;

use param_types::{Arguments, Artifact};
use tracing::{info, instrument, warn};

use crate::errors::GenerationError;
use crate::signature::Signature;

/// A parametric model generator.
///
/// `signature` declares the formal parameters; `generate` receives only
/// arguments that have already been validated against it. A generator may
/// still refuse a well-typed combination by returning
/// [`GenerationError::Rejected`].
pub trait Generator {
    fn name(&self) -> &str;

    fn signature(&self) -> Signature;

    fn generate(&self, arguments: &Arguments) -> Result<Vec<Artifact>, GenerationError>;
}

/// A generator that can be shared between sessions and threads.
pub type SharedGenerator = Arc<dyn Generator + Send + Sync>;

impl<G: Generator + ?Sized> Generator for Arc<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn signature(&self) -> Signature {
        (**self).signature()
    }

    fn generate(&self, arguments: &Arguments) -> Result<Vec<Artifact>, GenerationError> {
        (**self).generate(arguments)
    }
}

/// A generator assembled from a signature and a closure.
pub struct FnGenerator<F> {
    name: String,
    signature: Signature,
    body: F,
}

impl<F> FnGenerator<F>
where
    F: Fn(&Arguments) -> Result<Vec<Artifact>, GenerationError>,
{
    pub fn new(name: impl Into<String>, signature: Signature, body: F) -> Self {
        Self {
            name: name.into(),
            signature,
            body,
        }
    }
}

impl<F> Generator for FnGenerator<F>
where
    F: Fn(&Arguments) -> Result<Vec<Artifact>, GenerationError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> Signature {
        self.signature.clone()
    }

    fn generate(&self, arguments: &Arguments) -> Result<Vec<Artifact>, GenerationError> {
        (self.body)(arguments)
    }
}

/// Call a generator with validated arguments.
///
/// Errors raised by the generator are returned unchanged. Nothing is cached;
/// every call runs the generator again.
#[instrument(skip_all, fields(generator = generator.name()))]
pub fn invoke<G>(generator: &G, arguments: Arguments) -> Result<Vec<Artifact>, GenerationError>
where
    G: Generator + ?Sized,
{
    match generator.generate(&arguments) {
        Ok(artifacts) => {
            info!(artifacts = artifacts.len(), "generation finished");
            Ok(artifacts)
        }
        Err(e) => {
            warn!(error = %e, "generator refused arguments");
            Err(e)
        }
    }
}
