pub mod details;

pub use details::{AlmBindingForm, AlmBindingPage};
