//! Asset manifests on disk.
//!
//! `ManifestLoader` resolves an asset id against a root directory and reads
//! the JSON manifest on a background thread, so the frame loop never waits
//! on the filesystem.

use std::io;
use std::path::{Path, PathBuf};

use tidepool_sim::asset::{self, AssetCompletion, AssetError, AssetLoader, AssetResult};

pub struct ManifestLoader {
    root: PathBuf,
}

impl ManifestLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File that holds the manifest for `id`.
    pub fn resolve(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }
}

impl AssetLoader for ManifestLoader {
    fn load(&self, completion: AssetCompletion) {
        let path = self.resolve(completion.id());
        log::debug!("loading {} from {}", completion.id(), path.display());

        let spawned = std::thread::Builder::new()
            .name("tidepool-asset-loader".into())
            .spawn(move || {
                let result = read_manifest(completion.id(), &path);
                completion.complete(result);
            });
        // The completion went down with the closure, so the scene sees a
        // disconnected load.
        if let Err(err) = spawned {
            log::error!("failed to start asset loader thread: {err}");
        }
    }
}

/// Read and parse the manifest at `path`.
pub fn read_manifest(id: &str, path: &Path) -> AssetResult {
    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound(id.to_string()),
        _ => AssetError::Io {
            id: id.to_string(),
            source,
        },
    })?;
    asset::parse_manifest(id, &json)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    /// Asset root holding the given `(id, contents)` manifests. Removed on drop.
    fn asset_root(files: &[(&str, &str)]) -> TempDir {
        let root = TempDir::new().unwrap();
        for (id, contents) in files {
            std::fs::write(root.path().join(id), contents).unwrap();
        }
        root
    }

    /// Poll the ticket the way the scene does, giving the thread a moment.
    fn wait_for(loader: &ManifestLoader, id: &str) -> AssetResult {
        let (ticket, completion) = asset::request(id);
        loader.load(completion);
        for _ in 0..500 {
            if let Some(result) = ticket.try_take() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("loader never completed");
    }

    #[test]
    fn test_loads_manifest_in_background() {
        let root = asset_root(&[(
            "turtle.json",
            r#"{ "scale": 2.0, "clips": [{ "name": "swim", "duration_ms": 800.0 }] }"#,
        )]);

        let asset = wait_for(&ManifestLoader::new(root.path()), "turtle.json").unwrap();
        assert_eq!(asset.scale, 2.0);
        assert_eq!(asset.clips.len(), 1);
    }

    #[test]
    fn test_missing_manifest_is_not_found() {
        let root = asset_root(&[]);
        match wait_for(&ManifestLoader::new(root.path()), "nope.json") {
            Err(AssetError::NotFound(id)) => assert_eq!(id, "nope.json"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_bad_manifest_is_malformed() {
        let root = asset_root(&[("bad.json", "{ not json")]);

        assert!(matches!(
            wait_for(&ManifestLoader::new(root.path()), "bad.json"),
            Err(AssetError::Malformed { .. })
        ));
    }

    #[test]
    fn test_asset_root_removed_on_drop() {
        let root = asset_root(&[("turtle.json", "{}")]);
        let path = root.path().to_path_buf();
        assert!(wait_for(&ManifestLoader::new(&path), "turtle.json").is_ok());

        drop(root);
        assert!(!path.exists());
    }

    #[test]
    fn test_resolve_joins_root() {
        let loader = ManifestLoader::new("assets");
        assert_eq!(
            loader.resolve("models/turtle/scene.json"),
            Path::new("assets/models/turtle/scene.json")
        );
    }
}
