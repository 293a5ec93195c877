//! Markdown cleanup for spoken output.
//!
//! Language models answer in markdown. A TTS engine fed that text reads the
//! markup aloud ("asterisk asterisk hello") and pronounces `30-23` as
//! "thirty minus twenty-three". [`strip_markdown_for_tts`] runs a fixed
//! sequence of substitutions that leaves only the words:
//!
//! 1. bold (`**x**`, `__x__`)
//! 2. italic (`*x*`, `_x_`)
//! 3. inline code (`` `x` ``)
//! 4. links (`[label](url)` keeps the label)
//! 5. stray `*` and `_` not touching a word character
//! 6. numeric ranges (`30-23` becomes `30 to 23`)
//!
//! The order is significant: bold has to go before italic or `**x**` would
//! leave a pair of single stars behind.
//!
//! ```
//! use speech::strip_markdown_for_tts;
//!
//! assert_eq!(strip_markdown_for_tts("**hello** *world*!"), "hello world!");
//! assert_eq!(strip_markdown_for_tts("[docs](https://x.io)"), "docs");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_STARS: Lazy<Regex> = Lazy::new(|| compile(r"\*\*(.+?)\*\*"));
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| compile(r"__(.+?)__"));
static ITALIC_STARS: Lazy<Regex> = Lazy::new(|| compile(r"\*(.+?)\*"));
static ITALIC_UNDERSCORES: Lazy<Regex> = Lazy::new(|| compile(r"_(.+?)_"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| compile(r"`(.+?)`"));
static LINK: Lazy<Regex> = Lazy::new(|| compile(r"\[([^\]]+)\]\([^)]+\)"));
static NUMERIC_RANGE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)-(\d+)"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markdown pattern is a valid regex")
}

/// Strip markdown formatting that a TTS engine would read aloud.
///
/// Empty input is returned as is. The function never fails: syntax it does
/// not recognise stays in the output as literal characters.
pub fn strip_markdown_for_tts(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = text.to_string();
    for pass in [
        &*BOLD_STARS,
        &*BOLD_UNDERSCORES,
        &*ITALIC_STARS,
        &*ITALIC_UNDERSCORES,
        &*INLINE_CODE,
        &*LINK,
    ] {
        out = pass.replace_all(&out, "$1").into_owned();
    }

    // unclosed emphasis
    out = drop_standalone(&out, '*');
    out = drop_standalone(&out, '_');

    NUMERIC_RANGE
        .replace_all(&out, "${1} to ${2}")
        .into_owned()
}

/// [`strip_markdown_for_tts`] for callers holding optional text; `None` is
/// passed through untouched.
pub fn strip_markdown_opt(text: Option<&str>) -> Option<String> {
    text.map(strip_markdown_for_tts)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Remove every `marker` with no word character on either side of it.
fn drop_standalone(text: &str, marker: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c != marker {
                return true;
            }
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            before.is_some_and(is_word) || after.is_some_and(is_word)
        })
        .map(|(_, &c)| c)
        .collect()
}
