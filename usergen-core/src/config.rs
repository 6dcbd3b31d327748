use std::{
    env::{self, VarError},
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

use crate::error::Error;

const APP_NAME: &str = "UserGenerator";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub thank_you_millis: u64,
    pub request_timeout_secs: Option<u64>,
    /// Keep showing the last user in memory when a later fetch fails.
    pub keep_user_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            thank_you_millis: 2000,
            request_timeout_secs: None,
            keep_user_on_error: true,
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to read config {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Config>, Error> {
        match File::open(path) {
            Ok(file) => {
                log::info!("loading config: {:?}", path);
                Ok(Some(serde_json::from_reader(file)?))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Load the config file, writing the defaults out first if there is none
    /// yet.  Unreadable files are left alone and the defaults are used.
    pub fn load_or_init() -> Config {
        let Some(path) = Self::config_path() else {
            log::error!("no config directory available");
            return Config::default();
        };
        Self::init_at(&path).unwrap_or_else(|err| {
            log::error!("failed to read config {:?}: {}", path, err);
            Config::default()
        })
    }

    pub fn init_at(path: &Path) -> Result<Config, Error> {
        match Self::load_from(path)? {
            Some(config) => Ok(config),
            None => {
                let config = Config::default();
                config.save_to(path)?;
                log::info!("wrote default config: {:?}", path);
                Ok(config)
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn thank_you_duration(&self) -> Duration {
        Duration::from_millis(self.thank_you_millis)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy URL is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "thank_you_millis": 500 }"#).unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.thank_you_duration(), Duration::from_millis(500));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.keep_user_on_error);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn overlay_defaults_to_two_seconds() {
        assert_eq!(
            Config::default().thank_you_duration(),
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh").join(CONFIG_FILENAME);

        assert_eq!(Config::init_at(&path).unwrap(), Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Some(Config::default()));

        fs::write(&path, r#"{ "keep_user_on_error": false }"#).unwrap();
        assert!(!Config::init_at(&path).unwrap().keep_user_on_error);
    }

    #[test]
    fn init_leaves_malformed_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "not json").unwrap();
        assert!(Config::init_at(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);
        let config = Config {
            request_timeout_secs: Some(5),
            keep_user_on_error: false,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::JsonError(_))));
    }
}
