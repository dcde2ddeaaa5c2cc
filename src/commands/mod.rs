//! Command implementations

pub mod generate;
pub mod play;
pub mod survey;

pub use generate::{GenerateConfig, GeneratedPuzzle, generate_puzzle};
pub use play::run_play;
pub use survey::{SurveyResult, TierSurvey, run_survey};
