pub mod aggregate;

pub use aggregate::{BindingField, FieldValue, ProjectAlmBinding};
