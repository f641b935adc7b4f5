pub mod components;
pub mod config;
pub mod icons;
pub mod l10n;
