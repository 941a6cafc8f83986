use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::LexResult;

/// How runs of consecutive letters reach the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterMode {
    /// Letter runs stay one fragment, so `abc` classifies as `UNKNOWN`.
    #[default]
    Grouped,
    /// Letter runs are split into single characters, each a `LETTER`.
    PerCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub letter_mode: LetterMode,

    /// When false, `UNKNOWN` tokens are dropped from the output.
    #[serde(default = "default_true")]
    pub keep_unknown: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            letter_mode: LetterMode::default(),
            keep_unknown: default_true(),
        }
    }
}

impl TokenizerConfig {
    pub fn from_json_str(json: &str) -> LexResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> LexResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn default_true() -> bool {
    true
}
