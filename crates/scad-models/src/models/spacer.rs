use param_engine::{DomainRejection, GenerationError, Generator, ParameterDecl, Signature};
use param_types::{Arguments, Artifact};
use tracing::debug;

use crate::scad::Solid;

/// Extra height of the bore so the cut goes cleanly through both faces.
const BORE_OVERSHOOT: f64 = 2.0;

/// A flat spacer with a center bore; round or square outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer;

impl Spacer {
    pub const NAME: &'static str = "spacer";
}

impl Generator for Spacer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn signature(&self) -> Signature {
        Signature::new()
            .with(
                ParameterDecl::real("outer_diameter")
                    .with_description("Outer diameter / edge length")
                    .with_default(20.0),
            )
            .with(
                ParameterDecl::real("inner_diameter")
                    .with_description("Bore diameter")
                    .with_default(8.0),
            )
            .with(ParameterDecl::real("height").with_default(5.0))
            .with(
                ParameterDecl::choice("profile", ["round", "square"])
                    .with_description("Outline")
                    .with_default("round"),
            )
    }

    fn generate(&self, arguments: &Arguments) -> Result<Vec<Artifact>, GenerationError> {
        let outer = arguments.real("outer_diameter")?;
        let inner = arguments.real("inner_diameter")?;
        let height = arguments.real("height")?;
        let profile = arguments.choice("profile")?;

        if height <= 0.0 {
            return Err(DomainRejection::new(["height"], "height must be positive").into());
        }
        if inner < 0.0 {
            return Err(
                DomainRejection::new(["inner_diameter"], "inner_diameter must not be negative")
                    .into(),
            );
        }
        if inner >= outer {
            return Err(DomainRejection::new(
                ["inner_diameter", "outer_diameter"],
                "inner_diameter must be smaller than outer_diameter",
            )
            .into());
        }
        debug!(outer, inner, height, profile, "building spacer");

        let body = match profile {
            "square" => Solid::cube(outer, outer, height),
            _ => Solid::cylinder(height, outer),
        };
        let spacer = if inner > 0.0 {
            body.difference([Solid::cylinder(height + BORE_OVERSHOOT, inner)])
        } else {
            body
        };

        Ok(vec![Artifact::new("spacer", spacer.to_scad())])
    }
}
