pub mod cylinder_row;
pub mod spacer;

pub use cylinder_row::CylinderRow;
pub use spacer::Spacer;
