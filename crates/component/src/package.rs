use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Conventional manifest file name searched for on the upward walk.
pub const MANIFEST_FILE: &str = "package.json";

/// Fatal: an asset path cannot be derived without a package, so these abort
/// the current render instead of degrading.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no {MANIFEST_FILE} found walking up from {}", start.display())]
    NotFound { start: PathBuf },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} declares no autoload entries", path.display())]
    MissingAutoload { path: PathBuf },
}

#[derive(Debug, Deserialize)]
struct Manifest {
    // serde_json is built with preserve_order, so the first declared
    // autoload key really is the first entry of this map.
    #[serde(default)]
    autoload: Map<String, Value>,
}

/// A resolved package identity: the manifest's first autoload prefix plus
/// its precomputed asset-path hash. Resolve once, inject into components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    name: String,
    hash: String,
}

impl Package {
    /// Build a package from an already-known name, no filesystem access.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let hash = sha1_hex(&name);
        Self { name, hash }
    }

    /// Walk upward from `start` until a manifest file is found and take the
    /// package name from it.
    pub fn locate(start: &Path) -> Result<Self, ManifestError> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                return Self::from_manifest_file(&candidate);
            }
            dir = current.parent();
        }
        Err(ManifestError::NotFound {
            start: start.to_path_buf(),
        })
    }

    fn from_manifest_file(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let Some((name, _dir)) = manifest.autoload.into_iter().next() else {
            return Err(ManifestError::MissingAutoload {
                path: path.to_path_buf(),
            });
        };
        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Canonical web path for a package asset. Protocol-relative paths are
    /// already absolute and pass through verbatim.
    pub fn asset_path(&self, rel: &str) -> String {
        if rel.starts_with("//") {
            return rel.to_string();
        }
        format!("/assets/{}/{}", self.hash, rel.trim_start_matches('/'))
    }
}

fn sha1_hex(input: &str) -> String {
    let digest = Sha1::digest(input.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{MANIFEST_FILE, ManifestError, Package};
    use std::fs;

    const ACME_WIDGETS_SHA1: &str = "c0581645094d6e930b8e8e351cf8333f49c1608f";

    #[test]
    fn asset_path_hashes_the_package_name() {
        let package = Package::new("acme/widgets");
        assert_eq!(package.hash(), ACME_WIDGETS_SHA1);
        assert_eq!(
            package.asset_path("widget.js"),
            format!("/assets/{ACME_WIDGETS_SHA1}/widget.js")
        );
    }

    #[test]
    fn protocol_relative_paths_pass_through() {
        let package = Package::new("acme/widgets");
        assert_eq!(
            package.asset_path("//cdn.example.com/lib.js"),
            "//cdn.example.com/lib.js"
        );
    }

    #[test]
    fn locate_walks_up_to_the_manifest() {
        let root = tempfile::tempdir().expect("tempdir");
        let deep = root.path().join("src").join("widgets");
        fs::create_dir_all(&deep).expect("create dirs");
        fs::write(
            root.path().join(MANIFEST_FILE),
            r#"{"autoload": {"acme/widgets": "src/", "acme/extras": "extras/"}}"#,
        )
        .expect("write manifest");

        let package = Package::locate(&deep).expect("manifest on the walk");
        assert_eq!(package.name(), "acme/widgets");
    }

    #[test]
    fn locate_fails_without_a_manifest() {
        let root = tempfile::tempdir().expect("tempdir");
        let err = Package::locate(root.path()).expect_err("no manifest anywhere");
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn empty_autoload_is_fatal() {
        let root = tempfile::tempdir().expect("tempdir");
        fs::write(root.path().join(MANIFEST_FILE), r#"{"autoload": {}}"#).expect("write manifest");
        let err = Package::locate(root.path()).expect_err("no autoload entries");
        assert!(matches!(err, ManifestError::MissingAutoload { .. }));
    }
}
