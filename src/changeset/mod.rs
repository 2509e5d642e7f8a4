//! Changeset descriptors and their resolution into a wire change specification.

pub mod descriptor;
pub mod resolver;

pub use descriptor::ChangesetDescriptor;
pub use resolver::{ChangeSpecification, resolve, resolve_changes};
