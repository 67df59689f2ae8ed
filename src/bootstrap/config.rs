//! # Config Location
//!
//! Decides *where* configuration and storage live. Reading and mapping the
//! file is [`gym_infra::config`]'s job.

use std::path::{Path, PathBuf};

use gym_app::app_paths::AppPaths;
use gym_core::config::AppConfig;

pub const CONFIG_ENV_VAR: &str = "GYM_CONFIG";

/// `--config`, then `GYM_CONFIG`, then `<app data root>/config.toml`.
pub fn resolve_config_path(explicit: Option<&Path>, paths: &AppPaths) -> PathBuf {
    resolve_config_path_with_env(explicit, std::env::var_os(CONFIG_ENV_VAR), paths)
}

fn resolve_config_path_with_env(
    explicit: Option<&Path>,
    env_value: Option<std::ffi::OsString>,
    paths: &AppPaths,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => paths.config_path.clone(),
    }
}

/// `--data-dir`, then `[storage] data_dir`, then the platform storage dir.
pub fn resolve_storage_dir(explicit: Option<&Path>, config: &AppConfig, paths: &AppPaths) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if !config.data_dir.as_os_str().is_empty() {
        return config.data_dir.clone();
    }
    paths.storage_dir.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_core::app_dirs::AppDirs;

    fn paths() -> AppPaths {
        AppPaths::from_app_dirs(&AppDirs {
            app_data_root: PathBuf::from("/data/gym-onboarding"),
        })
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = resolve_config_path_with_env(
            Some(Path::new("/etc/gym.toml")),
            Some("/env/gym.toml".into()),
            &paths(),
        );
        assert_eq!(path, PathBuf::from("/etc/gym.toml"));
    }

    #[test]
    fn env_config_path_beats_default() {
        let path = resolve_config_path_with_env(None, Some("/env/gym.toml".into()), &paths());
        assert_eq!(path, PathBuf::from("/env/gym.toml"));
    }

    #[test]
    fn empty_env_falls_back_to_app_data_root() {
        let path = resolve_config_path_with_env(None, Some("".into()), &paths());
        assert_eq!(path, PathBuf::from("/data/gym-onboarding/config.toml"));
    }

    #[test]
    fn storage_dir_precedence() {
        let mut config = AppConfig::empty();
        assert_eq!(
            resolve_storage_dir(None, &config, &paths()),
            PathBuf::from("/data/gym-onboarding/storage")
        );

        config.data_dir = PathBuf::from("/srv/gym");
        assert_eq!(
            resolve_storage_dir(None, &config, &paths()),
            PathBuf::from("/srv/gym")
        );
        assert_eq!(
            resolve_storage_dir(Some(Path::new("/tmp/x")), &config, &paths()),
            PathBuf::from("/tmp/x")
        );
    }
}
