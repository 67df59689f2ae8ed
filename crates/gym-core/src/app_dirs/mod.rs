//! Where the onboarding app keeps its files.
//!
//! Only the data root is a platform fact. Storage slots, config and logs all
//! live beneath it; see `AppPaths` in the app layer for the concrete layout.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Per-profile root, e.g. `~/.local/share/gym-onboarding-dev`.
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// Entry directly under the data root.
    pub fn entry(&self, name: &str) -> PathBuf {
        self.app_data_root.join(name)
    }
}
