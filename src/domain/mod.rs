pub mod lane;
pub mod project;
pub mod validation;


pub use lane::LaneKind;
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{validate, Constraints, FieldValue};
