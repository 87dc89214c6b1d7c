pub mod config;
pub mod datamodel;

pub use config::{CONFIG_FILE_NAME, load_config_from_path, load_config_or_default};
pub use datamodel::{load_datamodel, load_datamodel_as, load_datamodel_for};
