pub mod config;
pub mod file_format;

pub use config::{DbmlOptions, DbmlgenConfig, ProjectOptions, default_output_name};
pub use file_format::FileFormat;
