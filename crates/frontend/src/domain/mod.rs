pub mod a002_project_alm_binding;
