use std::path::PathBuf;

const HOME_ENV: &str = "NVRD_HOME";
const DIR_NAME: &str = ".nvrd";
pub(crate) const HISTORY_FILENAME: &str = "history.json";

/// Locations of the files the reader keeps between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    /// `$NVRD_HOME` when set, otherwise `~/.nvrd`.
    pub fn resolve() -> Self {
        let data_dir = std::env::var_os(HOME_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(DIR_NAME));
        Self::in_dir(data_dir)
    }

    pub fn in_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(nvrd_logging::LOG_FILE_NAME)
    }
}
