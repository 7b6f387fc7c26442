pub mod path;

pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir, get_log_path, LOG_FILE_NAME};
