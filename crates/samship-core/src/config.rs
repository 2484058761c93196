use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "samship.toml";

/// samship.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamshipConfig {
    #[serde(default)]
    pub sam: SamConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamConfig {
    /// SAM CLI executable (defaults to `sam` on PATH)
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Template passed to `sam build --template`
    #[serde(default = "default_template")]
    pub template: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `<environment>.yaml` files
    #[serde(default = "default_environments_dir")]
    pub environments_dir: PathBuf,
}

impl Default for SamConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            template: default_template(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            environments_dir: default_environments_dir(),
        }
    }
}

impl SamshipConfig {
    /// Load from samship.toml in the given directory, or return defaults if not found.
    ///
    /// Relative paths in the file are interpreted against the working directory.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_binary() -> String {
    "sam".to_owned()
}

fn default_template() -> PathBuf {
    PathBuf::from("template.yaml")
}

fn default_environments_dir() -> PathBuf {
    PathBuf::from("environments")
}
