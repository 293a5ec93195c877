//! The seam between the agent and a text-to-speech engine.
//!
//! Engines implement [`Mouth`]. Wrap one in a [`SpeakableMouth`] so it only
//! ever receives text that has been through
//! [`strip_markdown_for_tts`](speech::strip_markdown_for_tts).
//!
//! ```no_run
//! use agent::{Mouth, SpeakableMouth, StdoutMouth};
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let mouth = SpeakableMouth::new(Arc::new(StdoutMouth::default()));
//! mouth.speak("The score was **30-23**.").await;
//! # }
//! ```

use async_trait::async_trait;
use speech::strip_markdown_for_tts;
use std::io::Write;
use std::sync::Arc;
use tracing::trace;

/// A `Mouth` turns text into audio.
///
/// Implementations must be `Send` and `Sync` so they can be shared across
/// tasks.
#[async_trait]
pub trait Mouth: Send + Sync {
    /// Vocalize `text`. Resolves once the speech is completed.
    async fn speak(&self, text: &str);
    /// Interrupt any in-progress speech.
    async fn interrupt(&self);
    /// Return `true` while speech is being produced.
    fn speaking(&self) -> bool;
}

/// [`Mouth`] implementation that removes markdown before speaking.
///
/// Text that is empty once stripped and trimmed is not forwarded.
#[derive(Clone)]
pub struct SpeakableMouth {
    inner: Arc<dyn Mouth>,
}

impl SpeakableMouth {
    /// Create a new [`SpeakableMouth`] wrapping `inner`.
    pub fn new(inner: Arc<dyn Mouth>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Mouth for SpeakableMouth {
    async fn speak(&self, text: &str) {
        let plain = strip_markdown_for_tts(text);
        let trimmed = plain.trim();
        if trimmed.is_empty() {
            return;
        }
        trace!(spoken = trimmed, "speaking");
        self.inner.speak(trimmed).await;
    }

    async fn interrupt(&self) {
        self.inner.interrupt().await;
    }

    fn speaking(&self) -> bool {
        self.inner.speaking()
    }
}

/// Writes each utterance to stdout on its own line. Used when no TTS engine
/// is attached.
#[derive(Clone, Default)]
pub struct StdoutMouth;

#[async_trait]
impl Mouth for StdoutMouth {
    async fn speak(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }

    async fn interrupt(&self) {}

    fn speaking(&self) -> bool {
        false
    }
}
