//! Application directory facts and the concrete paths derived from them.

use std::path::PathBuf;

use crate::config::StorageConfig;

/// Root directories resolved by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

/// Concrete file locations used by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Key-value document backing the persisted store.
    pub store_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    /// Derive paths from the platform directories.
    ///
    /// `storage.data_dir`, when set, replaces the platform data root.
    pub fn resolve(dirs: &AppDirs, storage: &StorageConfig) -> Self {
        let root = storage
            .data_dir
            .clone()
            .unwrap_or_else(|| dirs.app_data_root.clone());

        Self {
            store_path: root.join(&storage.file_name),
            logs_dir: root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/little-lemon"),
        };

        let paths = AppPaths::resolve(&dirs, &StorageConfig::default());

        assert_eq!(
            paths.store_path,
            PathBuf::from("/tmp/little-lemon/async-storage.json")
        );
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/little-lemon/logs"));
    }

    #[test]
    fn data_dir_override_replaces_platform_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/little-lemon"),
        };
        let storage = StorageConfig {
            file_name: "state.json".to_string(),
            data_dir: Some(PathBuf::from("/var/ll")),
        };

        let paths = AppPaths::resolve(&dirs, &storage);

        assert_eq!(paths.store_path, PathBuf::from("/var/ll/state.json"));
        assert_eq!(paths.logs_dir, PathBuf::from("/var/ll/logs"));
    }
}
