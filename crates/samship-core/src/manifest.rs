use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::document::{DocumentKind, RequiredFields, lookup, render_scalar};

/// Location of the manifest relative to the artifact root.
pub const MANIFEST_RELATIVE_PATH: &str = "dist/manifest.json";

/// Fields every deployable manifest must carry.
pub const MANIFEST_SCHEMA: RequiredFields = RequiredFields::new(
    DocumentKind::Manifest,
    &[
        "application.name",
        "application.version",
        "application.runtime",
        "resources.handler",
    ],
);

/// The build manifest produced alongside a packaged application.
///
/// The raw document is kept as-is; unknown fields are ignored.
#[derive(Debug, Clone)]
pub struct Manifest {
    document: Value,
}

/// Packaging metadata recorded by the build step, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub timestamp: Option<String>,
    pub node_version: Option<String>,
    pub environment: Option<String>,
    pub main_artifact: Option<String>,
}

impl BuildInfo {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Manifest {
    /// Path of the manifest under an artifact root.
    pub fn path_in(artifact_path: &Path) -> PathBuf {
        artifact_path.join(MANIFEST_RELATIVE_PATH)
    }

    /// Read and parse `<artifact_path>/dist/manifest.json`.
    ///
    /// No schema validation happens here; see [`Manifest::validate`].
    pub fn load(artifact_path: &Path) -> crate::Result<Self> {
        let path = Self::path_in(artifact_path);
        tracing::debug!(path = %path.display(), "loading manifest");

        let content = crate::error::read_document(&path)?;
        let document =
            serde_json::from_str(&content).map_err(|e| crate::Error::ManifestParse {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self { document })
    }

    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// Check that all fields in [`MANIFEST_SCHEMA`] are present.
    pub fn validate(&self) -> crate::Result<()> {
        MANIFEST_SCHEMA.check(&self.document)
    }

    /// Value at a dotted path, rendered as a parameter string.
    pub(crate) fn field(&self, path: &str) -> crate::Result<String> {
        lookup(&self.document, path)
            .map(render_scalar)
            .ok_or_else(|| crate::Error::MissingField {
                document: DocumentKind::Manifest,
                path: path.to_owned(),
            })
    }

    /// Optional packaging metadata (`build.*`, `artifacts.main`).
    pub fn build_info(&self) -> BuildInfo {
        let text = |path: &str| {
            lookup(&self.document, path).and_then(|v| v.as_str().map(str::to_owned))
        };
        BuildInfo {
            timestamp: text("build.timestamp"),
            node_version: text("build.nodeVersion"),
            environment: text("build.environment"),
            main_artifact: text("artifacts.main"),
        }
    }
}
