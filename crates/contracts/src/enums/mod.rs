pub mod alm_kind;

pub use alm_kind::AlmKind;
