//! Simulator configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Where the simulator finds its inputs and writes its logs.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub config_path: Option<PathBuf>,
    pub items_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_to_file: bool,
    pub session_id: Option<String>,
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            config_path: None,
            items_path: None,
            script_path: None,
            log_dir: None,
            log_to_file: false,
            session_id: None,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AUTOEQUIP_DATA_DIR` - Directory holding `items.ron` and `config.toml` (default: `data`)
    /// - `AUTOEQUIP_CONFIG` - Auto-equip config TOML, overrides the data directory's
    /// - `AUTOEQUIP_ITEMS` - Item catalog RON, overrides the data directory's
    /// - `AUTOEQUIP_SCRIPT` - Session script RON (default: `<data dir>/script.ron`)
    /// - `AUTOEQUIP_LOG_DIR` - Write logs to this directory as well as stderr
    /// - `AUTOEQUIP_LOG_TO_FILE` - Write logs to the platform cache directory (default: false)
    /// - `AUTOEQUIP_SESSION_ID` - Log sub-directory name (default: timestamp)
    /// - `AUTOEQUIP_PRETTY` - Pretty-print the JSON report (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("AUTOEQUIP_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.config_path = read_path("AUTOEQUIP_CONFIG");
        config.items_path = read_path("AUTOEQUIP_ITEMS");
        config.script_path = read_path("AUTOEQUIP_SCRIPT");
        config.log_dir = read_path("AUTOEQUIP_LOG_DIR");

        if let Some(enable) = read_env_bool("AUTOEQUIP_LOG_TO_FILE") {
            config.log_to_file = enable;
        }
        config.session_id = env::var("AUTOEQUIP_SESSION_ID").ok();

        if let Some(pretty) = read_env_bool("AUTOEQUIP_PRETTY") {
            config.pretty = pretty;
        }

        config
    }

    /// Session script location; a command-line argument wins over the environment.
    pub fn script_file(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.script_path.clone())
            .unwrap_or_else(|| self.data_dir.join("script.ron"))
    }

    /// Directory for file logs, if file logging is on.
    pub fn file_log_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.log_dir {
            return Some(dir.clone());
        }
        self.log_to_file.then(default_log_dir)
    }
}

/// Platform cache directory for simulator logs.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "autoequip")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/autoequip/logs"))
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
