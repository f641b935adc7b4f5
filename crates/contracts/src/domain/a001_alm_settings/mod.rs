pub mod aggregate;

pub use aggregate::AlmSettingsInstance;
