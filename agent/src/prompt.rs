//! System prompt construction.
//!
//! The template on disk may contain two placeholders:
//!
//! - `{{CURRENT_DATE_CONTEXT}}`, replaced by a sentence such as
//!   "Today is Wednesday, January twenty-second, 2025. The current time is
//!   2 PM US Eastern Time."
//! - `{{TIMEZONE}}`, replaced by the spoken timezone name.
//!
//! The date is spelled out in words so the model repeats it in a form the
//! TTS voice reads naturally.

use chrono::{DateTime, TimeZone};
use speech::speech_date_context;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{AgentError, Config, Result};

pub const DATE_CONTEXT_PLACEHOLDER: &str = "{{CURRENT_DATE_CONTEXT}}";
pub const TIMEZONE_PLACEHOLDER: &str = "{{TIMEZONE}}";

/// Fill the placeholders of `template`.
pub fn render_system_prompt(template: &str, date_context: &str, timezone_display: &str) -> String {
    template
        .replace(DATE_CONTEXT_PLACEHOLDER, date_context)
        .replace(TIMEZONE_PLACEHOLDER, timezone_display)
}

/// Prompts for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub greeting: String,
    pub date_context: String,
    pub system_prompt: String,
}

impl PromptSet {
    /// Read the prompt files named by `config` and render them for `now`.
    ///
    /// `now` may be in any timezone; it is converted to the configured one
    /// before being spoken.
    pub fn load<Z: TimeZone>(config: &Config, now: DateTime<Z>) -> Result<Self> {
        let tz = config.timezone()?;
        let local = now.with_timezone(&tz);
        let date_context = speech_date_context(&local, &config.timezone_display);

        let template = read_prompt(&config.system_prompt_path)?;
        let greeting = read_prompt(&config.greeting_path)?;
        let system_prompt =
            render_system_prompt(&template, &date_context, &config.timezone_display);

        Ok(Self {
            greeting,
            date_context,
            system_prompt,
        })
    }
}

fn read_prompt(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading prompt");
    fs::read_to_string(path).map_err(|source| AgentError::ReadPrompt {
        path: path.to_path_buf(),
        source,
    })
}
