use std::sync::Arc;

use param_engine::{Generator, SharedGenerator};

use crate::models::{CylinderRow, Spacer};

/// The generator used when a front end does not name one.
pub const DEFAULT_MODEL: &str = CylinderRow::NAME;

/// All shipped generators, in display order.
pub fn registry() -> Vec<SharedGenerator> {
    vec![
        Arc::new(CylinderRow) as SharedGenerator,
        Arc::new(Spacer) as SharedGenerator,
    ]
}

/// Look up a generator by name.
pub fn find(name: &str) -> Option<SharedGenerator> {
    registry().into_iter().find(|g| g.name() == name)
}

pub fn names() -> Vec<String> {
    registry().iter().map(|g| g.name().to_string()).collect()
}
