use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One productivity bucket: a category name plus the app-name substrings
/// that select it. Order matters, the first matching category wins.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoryRule {
    pub(crate) name: String,
    pub(crate) apps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    /// Activity log written by the capture client.
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
    #[serde(default = "default_limit")]
    pub(crate) default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub(crate) max_limit: usize,
    /// Window of the zero-filled daily histogram.
    #[serde(default = "default_daily_days")]
    pub(crate) daily_days: i64,
    #[serde(default = "default_hourly_days")]
    pub(crate) hourly_days: i64,
    #[serde(default = "default_productivity_days")]
    pub(crate) productivity_days: i64,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default = "default_categories")]
    pub(crate) categories: Vec<CategoryRule>,
}

fn default_limit() -> usize {
    100
}

fn default_max_limit() -> usize {
    1000
}

fn default_daily_days() -> i64 {
    30
}

fn default_hourly_days() -> i64 {
    7
}

fn default_productivity_days() -> i64 {
    7
}

fn default_categories() -> Vec<CategoryRule> {
    let rules: [(&str, &[&str]); 4] = [
        (
            "productive",
            &["code.exe", "notepad.exe", "winword.exe", "excel.exe", "powerpnt.exe"],
        ),
        (
            "browsers",
            &["chrome.exe", "firefox.exe", "msedge.exe", "iexplore.exe"],
        ),
        (
            "communication",
            &["teams.exe", "slack.exe", "discord.exe", "zoom.exe"],
        ),
        (
            "entertainment",
            &["spotify.exe", "vlc.exe", "steam.exe", "games"],
        ),
    ];
    rules
        .iter()
        .map(|(name, apps)| CategoryRule {
            name: name.to_string(),
            apps: apps.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            daily_days: default_daily_days(),
            hourly_days: default_hourly_days(),
            productivity_days: default_productivity_days(),
            timezone: None,
            debug: false,
            no_color: false,
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Load from the first parseable config location, also reporting which
    /// file won so the caller can announce it once verbosity is settled
    /// (the config file itself may be what turns debug output on).
    pub(crate) fn load() -> (Self, Option<PathBuf>) {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return (config, Some(path)),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        (Self::default(), None)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/focustats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("focustats").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support on macOS
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("focustats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.focustats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".focustats.toml"));
        }

        paths
    }

    /// Resolve the activity log path: CLI flag, then FOCUSTATS_DATA_FILE,
    /// then the config file, then the platform-local default.
    pub(crate) fn data_file_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Ok(path) = env::var("FOCUSTATS_DATA_FILE")
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("focustats")
            .join("app_usage.json")
    }

    pub(crate) fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}
