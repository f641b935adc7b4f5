//! Project ALM binding details
//!
//! - plan.rs: pure decisions (which screen, which fields, which actions)
//! - fields.rs: label and field renderers
//! - view.rs: the binding form component (stateless)
//! - view_model.rs: in-memory controller feeding the form
//! - page.rs: page wiring the controller to the form

mod fields;
mod page;
pub mod plan;
mod view;
mod view_model;

pub use page::AlmBindingPage;
pub use view::AlmBindingForm;
pub use view_model::AlmBindingVm;
