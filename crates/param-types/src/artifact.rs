use serde::{Deserialize, Serialize};

/// One named piece of generator output, e.g. the source of one `.scad` file.
///
/// The content is opaque here; only the geometry side knows what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
