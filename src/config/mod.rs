//! Configuration module for Samtale.

pub mod prompts;
pub mod settings;

pub use prompts::{AnalysisPrompts, Prompts};
pub use settings::{
    GeneralSettings, InferenceSettings, PromptSettings, ServerSettings, Settings, StoreSettings,
};
