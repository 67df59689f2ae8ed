use std::path::PathBuf;

use gym_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub storage_dir: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            storage_dir: dirs.entry("storage"),
            config_path: dirs.entry("config.toml"),
            logs_dir: dirs.entry("logs"),
        }
    }
}
