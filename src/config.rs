// File: src/config.rs
use crate::core::context::{ContextModel, DEFAULT_MAX_SUGGESTIONS};
use crate::core::predictor::{Predictor, StaticPredictor};
use crate::error::{Result, SmartTypeError};
use crate::persistence::load_from_disk;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Which next-word source the keyboard uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// The built-in bigram table.
    #[default]
    Static,
    /// A trigram model trained from a corpus or loaded from a snapshot.
    Trained,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub model: ModelKind,
    /// Only applies to the trained model; the static table is returned whole.
    pub max_suggestions: usize,
    /// Bincode snapshot to load instead of training on the seed corpus.
    pub snapshot: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::Static,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            snapshot: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: EngineConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(SmartTypeError::Config(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        if self.snapshot.is_some() && self.model == ModelKind::Static {
            return Err(SmartTypeError::Config(
                "a snapshot requires the trained model".to_string(),
            ));
        }
        Ok(())
    }

    /// The trained model this config describes: the snapshot if one is set,
    /// otherwise a fresh model trained on the seed corpus.
    pub fn build_context_model(&self) -> Result<ContextModel> {
        let model = match &self.snapshot {
            Some(path) => {
                let mut model = load_from_disk(path)?;
                model.set_max_suggestions(self.max_suggestions);
                info!("loaded model snapshot from {}", path.display());
                model
            }
            None => ContextModel::seeded(self.max_suggestions),
        };
        Ok(model)
    }

    pub fn build_predictor(&self) -> Result<Box<dyn Predictor>> {
        self.validate()?;
        match self.model {
            ModelKind::Static => Ok(Box::new(StaticPredictor::new())),
            ModelKind::Trained => Ok(Box::new(self.build_context_model()?)),
        }
    }
}
