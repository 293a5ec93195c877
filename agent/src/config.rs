//! Agent configuration.
//!
//! Every setting can come from a command-line flag or an environment
//! variable of the same name in upper snake case. A `.env` file in the
//! working directory is read by [`Config::load`] before parsing.

use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;

use crate::{AgentError, Result};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// IANA timezone used for the spoken date and time
    #[arg(long, env = "TIMEZONE_ID", default_value = "America/New_York")]
    pub timezone_id: String,

    /// Name of the timezone as it should be spoken
    #[arg(long, env = "TIMEZONE_DISPLAY", default_value = "US Eastern Time")]
    pub timezone_display: String,

    /// System prompt template
    #[arg(long, env = "SYSTEM_PROMPT_PATH", default_value = "./prompt/system.md")]
    pub system_prompt_path: PathBuf,

    /// Greeting spoken when a session starts
    #[arg(long, env = "GREETING_PATH", default_value = "./prompt/greeting.md")]
    pub greeting_path: PathBuf,

    #[arg(long, env = "OLLAMA_HOST", default_value = "localhost:11434")]
    pub ollama_host: String,

    #[arg(long, env = "OLLAMA_MODEL", default_value = "qwen3:8b")]
    pub ollama_model: String,

    #[arg(long, env = "OLLAMA_TEMPERATURE", default_value_t = 0.8)]
    pub ollama_temperature: f32,

    #[arg(long, env = "TTS_HOST", default_value = "http://localhost:11800")]
    pub tts_host: String,

    /// Playback speed multiplier for synthesized speech
    #[arg(long, env = "TTS_SPEED", default_value_t = 1.0)]
    pub tts_speed: f32,
}

impl Config {
    /// Read `.env` if present, then parse flags and environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    /// Resolve [`Config::timezone_id`].
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone_id
            .parse::<Tz>()
            .map_err(|_| AgentError::UnknownTimezone(self.timezone_id.clone()))
    }
}
