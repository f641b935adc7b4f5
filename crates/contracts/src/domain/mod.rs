pub mod a001_alm_settings;
pub mod a002_project_alm_binding;
