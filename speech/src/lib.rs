//! Normalize written text for a text-to-speech voice.
//!
//! Two independent passes live here: [`strip_markdown_for_tts`] removes
//! markdown markup a TTS engine would otherwise pronounce, and the
//! [`format_date_speech_friendly`] / [`format_time_speech_friendly`] pair
//! renders a timestamp the way a person would say it.
//!
//! ```
//! use chrono::NaiveDate;
//! use speech::{format_date_speech_friendly, format_time_speech_friendly, strip_markdown_for_tts};
//!
//! assert_eq!(strip_markdown_for_tts("**final** score 30-23"), "final score 30 to 23");
//!
//! let ts = NaiveDate::from_ymd_opt(2025, 3, 6)
//!     .and_then(|d| d.and_hms_opt(15, 30, 0))
//!     .unwrap();
//! assert_eq!(format_date_speech_friendly(&ts), "Thursday, March sixth, 2025");
//! assert_eq!(format_time_speech_friendly(&ts), "3:30 PM");
//! ```

pub mod markdown;
pub mod ordinal;
pub mod time;

pub use markdown::{strip_markdown_for_tts, strip_markdown_opt};
pub use ordinal::to_ordinal_word;
pub use time::{format_date_speech_friendly, format_time_speech_friendly, speech_date_context};
