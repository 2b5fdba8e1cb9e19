use param_engine::{DomainRejection, GenerationError, Generator, ParameterDecl, Signature};
use param_types::{Arguments, Artifact};
use tracing::debug;

use crate::scad::{Align, Solid};

/// Cross-section of the bar and diameter of each cylinder.
const SECTION: f64 = 10.0;

/// Largest accepted `count`.
pub const MAX_COUNT: i64 = 1000;

/// Where `offset` mode moves the left face of both solids.
const OFFSET_LEFT: f64 = 5.0;

/// A square bar and a row of cylinders lying along it.
///
/// Produces two artifacts, `cube` and `cylinder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CylinderRow;

impl CylinderRow {
    pub const NAME: &'static str = "cylinder-row";
}

impl Generator for CylinderRow {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn signature(&self) -> Signature {
        Signature::new()
            .with(ParameterDecl::real("length").with_description("Length of bar and cylinders"))
            .with(ParameterDecl::integer("count").with_description("Number of cylinders"))
            .with(
                ParameterDecl::choice("mode", ["centered", "offset"])
                    .with_description("Placement"),
            )
    }

    fn generate(&self, arguments: &Arguments) -> Result<Vec<Artifact>, GenerationError> {
        let length = arguments.real("length")?;
        let count = arguments.integer("count")?;
        let mode = arguments.choice("mode")?;

        if count < 1 {
            return Err(DomainRejection::new(["count"], "count must be at least 1").into());
        }
        if count > MAX_COUNT {
            return Err(DomainRejection::new(
                ["count"],
                format!("count must be at most {MAX_COUNT}"),
            )
            .into());
        }
        if length <= 0.0 {
            return Err(DomainRejection::new(["length"], "length must be positive").into());
        }
        debug!(length, count, mode, "building cylinder row");

        let mut bar = Solid::cube(length, SECTION, SECTION);
        let mut row = Solid::union((0..count).map(|i| {
            Solid::cylinder(length, SECTION)
                .y_rotate(90.0)
                .align(Align::default().center_y(i as f64))
        }));
        if mode == "offset" {
            bar = bar.align(Align::default().left(OFFSET_LEFT));
            row = row.align(Align::default().left(OFFSET_LEFT));
        }

        Ok(vec![
            Artifact::new("cube", bar.to_scad()),
            Artifact::new("cylinder", row.to_scad()),
        ])
    }
}
