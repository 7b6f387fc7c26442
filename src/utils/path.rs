use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/scrollfocus, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("scrollfocus")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to (platform cache dir, or home)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("scrollfocus")
}

pub fn get_log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

/// Name of the log file inside [`get_log_dir`]
pub const LOG_FILE_NAME: &str = "scrollfocus.log";
