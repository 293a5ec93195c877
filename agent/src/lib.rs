//! Host plumbing around the [`speech`] normalizer.
//!
//! Loads configuration, sets up logging, renders the system prompt with a
//! spoken date context and guards the TTS seam so only cleaned text reaches
//! it.

pub mod config;
pub mod error;
pub mod logging;
pub mod mouth;
pub mod prompt;

pub use config::Config;
pub use error::{AgentError, Result};
pub use logging::init_logging;
pub use mouth::{Mouth, SpeakableMouth, StdoutMouth};
pub use prompt::{PromptSet, render_system_prompt};
