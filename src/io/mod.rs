pub mod config_io;
pub mod store;

pub use config_io::{load_config, resolve_data_file, ConfigError};
pub use store::{read_all, write_all, StoreError};
