use std::fmt::{self, Write};

use nalgebra::{Point3, Rotation3, Vector3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// A box of the given extents centered on the origin.
    pub fn centered(size: Vector3<f64>) -> Self {
        let half = size / 2.0;
        Self {
            min: Point3::from(-half),
            max: Point3::from(half),
        }
    }

    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand_to_include(&mut self, p: &Point3<f64>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(b.x, b.y, b.z),
            Point3::new(a.x, b.y, b.z),
        ]
    }

    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            min: self.min + *offset,
            max: self.max + *offset,
        }
    }

    /// Bounds of this box after rotating it; exact for multiples of 90°,
    /// conservative otherwise.
    pub fn rotated(&self, rotation: &Rotation3<f64>) -> Self {
        let mut out = Self::empty();
        for corner in self.corners() {
            out.expand_to_include(&(rotation * corner));
        }
        out
    }
}

/// Where to move a solid's bounding box. Unset axes stay put.
///
/// For each axis at most one of the min/max/center targets is used, in that
/// order of preference.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Align {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub center_x: Option<f64>,
    pub front: Option<f64>,
    pub back: Option<f64>,
    pub center_y: Option<f64>,
    pub bottom: Option<f64>,
    pub top: Option<f64>,
    pub center_z: Option<f64>,
}

impl Align {
    pub fn left(mut self, x: f64) -> Self {
        self.left = Some(x);
        self
    }

    pub fn right(mut self, x: f64) -> Self {
        self.right = Some(x);
        self
    }

    pub fn center_x(mut self, x: f64) -> Self {
        self.center_x = Some(x);
        self
    }

    pub fn front(mut self, y: f64) -> Self {
        self.front = Some(y);
        self
    }

    pub fn back(mut self, y: f64) -> Self {
        self.back = Some(y);
        self
    }

    pub fn center_y(mut self, y: f64) -> Self {
        self.center_y = Some(y);
        self
    }

    pub fn bottom(mut self, z: f64) -> Self {
        self.bottom = Some(z);
        self
    }

    pub fn top(mut self, z: f64) -> Self {
        self.top = Some(z);
        self
    }

    pub fn center_z(mut self, z: f64) -> Self {
        self.center_z = Some(z);
        self
    }

    fn offset(&self, bounds: &Bounds) -> Vector3<f64> {
        let c = bounds.center();
        let axis = |min_t: Option<f64>, max_t: Option<f64>, center_t: Option<f64>, i: usize| {
            min_t
                .map(|t| t - bounds.min[i])
                .or_else(|| max_t.map(|t| t - bounds.max[i]))
                .or_else(|| center_t.map(|t| t - c[i]))
                .unwrap_or(0.0)
        };
        Vector3::new(
            axis(self.left, self.right, self.center_x, 0),
            axis(self.front, self.back, self.center_y, 1),
            axis(self.bottom, self.top, self.center_z, 2),
        )
    }
}

/// A solid, as a tree of OpenSCAD operations.
///
/// Primitives are always centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Cube {
        size: [f64; 3],
    },
    Cylinder {
        height: f64,
        diameter: f64,
    },
    Translate {
        offset: [f64; 3],
        child: Box<Solid>,
    },
    /// Euler angles in degrees, applied x, then y, then z.
    Rotate {
        angles: [f64; 3],
        child: Box<Solid>,
    },
    Union(Vec<Solid>),
    Difference {
        base: Box<Solid>,
        cut: Vec<Solid>,
    },
}

impl Solid {
    pub fn cube(x: f64, y: f64, z: f64) -> Self {
        Solid::Cube { size: [x, y, z] }
    }

    pub fn cylinder(height: f64, diameter: f64) -> Self {
        Solid::Cylinder { height, diameter }
    }

    pub fn union(children: impl IntoIterator<Item = Solid>) -> Self {
        Solid::Union(children.into_iter().collect())
    }

    pub fn difference(self, cut: impl IntoIterator<Item = Solid>) -> Self {
        Solid::Difference {
            base: Box::new(self),
            cut: cut.into_iter().collect(),
        }
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        Solid::Translate {
            offset: [x, y, z],
            child: Box::new(self),
        }
    }

    pub fn rotate(self, x: f64, y: f64, z: f64) -> Self {
        Solid::Rotate {
            angles: [x, y, z],
            child: Box::new(self),
        }
    }

    pub fn y_rotate(self, degrees: f64) -> Self {
        self.rotate(0.0, degrees, 0.0)
    }

    /// Move the solid so that its bounding box meets the targets in `align`.
    pub fn align(self, align: Align) -> Self {
        let offset = align.offset(&self.bounds());
        if offset == Vector3::zeros() {
            return self;
        }
        self.translate(offset.x, offset.y, offset.z)
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Solid::Cube { size } => Bounds::centered(Vector3::from(*size)),
            Solid::Cylinder { height, diameter } => {
                Bounds::centered(Vector3::new(*diameter, *diameter, *height))
            }
            Solid::Translate { offset, child } => child.bounds().translated(&Vector3::from(*offset)),
            Solid::Rotate { angles, child } => child.bounds().rotated(&rotation(angles)),
            Solid::Union(children) => children
                .iter()
                .fold(Bounds::empty(), |acc, c| acc.union(&c.bounds())),
            Solid::Difference { base, .. } => base.bounds(),
        }
    }

    /// Render as OpenSCAD source.
    pub fn to_scad(&self) -> String {
        self.to_string()
    }

    fn write_scad(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Solid::Cube { size } => writeln!(out, "{indent}cube({}, center = true);", vector(size)),
            Solid::Cylinder { height, diameter } => writeln!(
                out,
                "{indent}cylinder(h = {}, d = {}, center = true);",
                number(*height),
                number(*diameter)
            ),
            Solid::Translate { offset, child } => {
                writeln!(out, "{indent}translate({})", vector(offset))?;
                child.write_scad(out, depth + 1)
            }
            Solid::Rotate { angles, child } => {
                writeln!(out, "{indent}rotate({})", vector(angles))?;
                child.write_scad(out, depth + 1)
            }
            Solid::Union(children) => {
                writeln!(out, "{indent}union() {{")?;
                for child in children {
                    child.write_scad(out, depth + 1)?;
                }
                writeln!(out, "{indent}}}")
            }
            Solid::Difference { base, cut } => {
                writeln!(out, "{indent}difference() {{")?;
                base.write_scad(out, depth + 1)?;
                for child in cut {
                    child.write_scad(out, depth + 1)?;
                }
                writeln!(out, "{indent}}}")
            }
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_scad(f, 0)
    }
}

/// OpenSCAD's `rotate([x, y, z])`: about x first, then y, then z.
fn rotation(angles: &[f64; 3]) -> Rotation3<f64> {
    Rotation3::from_euler_angles(
        angles[0].to_radians(),
        angles[1].to_radians(),
        angles[2].to_radians(),
    )
}

fn vector(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", number(v[0]), number(v[1]), number(v[2]))
}

/// Folds `-0` into `0` so the output does not depend on how a zero came about.
fn number(v: f64) -> f64 {
    v + 0.0
}
