pub mod classifier;
pub mod keywords;
pub mod label;

use thiserror::Error;

pub use classifier::{classify, ClassificationMatch, KeywordClassifier, KeywordRule};
pub use label::EmotionLabel;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmotionError {
    #[error("Unknown emotion label: {0}")]
    UnknownLabel(String),
}
