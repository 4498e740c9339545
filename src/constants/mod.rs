pub mod defaults;
pub mod envvars;
