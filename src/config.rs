use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PipelineError;

pub const CONFIG_FILE: &str = "ocr_pipeline.json";

fn default_input() -> PathBuf {
    PathBuf::from("in.ernet.dli.2015.223292").join("2015.223292.A-Dictionary_djvu.txt")
}

fn default_raw_output() -> PathBuf {
    PathBuf::from("review").join("dictionary_raw.csv")
}

fn default_review_output() -> PathBuf {
    PathBuf::from("review").join("dictionary_review.csv")
}

/// Where the tool lives; every relative path hangs off this.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PipelineConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_raw_output")]
    pub raw_output: PathBuf,

    #[serde(default = "default_review_output")]
    pub review_output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            raw_output: default_raw_output(),
            review_output: default_review_output(),
        }
    }
}

impl PipelineConfig {
    /// Defaults, overridden by `ocr_pipeline.json` under `root` when present.
    /// Returned paths are absolute against `root`.
    pub fn load(root: &Path) -> Result<Self, PipelineError> {
        let path = root.join(CONFIG_FILE);

        let cfg = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|source| PipelineError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str::<PipelineConfig>(&data)
                .map_err(|source| PipelineError::Config { path, source })?
        } else {
            PipelineConfig::default()
        };

        Ok(cfg.rooted_at(root))
    }

    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            input: root.join(self.input),
            raw_output: root.join(self.raw_output),
            review_output: root.join(self.review_output),
        }
    }
}
