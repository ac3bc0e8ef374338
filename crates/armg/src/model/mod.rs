//! The crane scene hierarchy and its kinematic control surface.

mod kinematics;
mod payload;
mod spawn;
mod tests;
pub mod types;

pub use kinematics::TransformAccess;
pub use types::{CraneModel, CranePart, CraneParts, Payload};
