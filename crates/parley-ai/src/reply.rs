//! Conventions for consuming bot replies outside the transcript.
//!
//! The image persona answers with `![Generated Image](<url>)`. The session
//! stores that text untouched; speech and clipboard consumers use these
//! helpers so they never read a raw URL aloud or copy markdown noise.

use std::sync::OnceLock;

use regex::Regex;

/// Marker that starts every generated-image reply.
pub const GENERATED_IMAGE_MARKER: &str = "![Generated Image](";

pub fn is_generated_image(text: &str) -> bool {
    text.contains(GENERATED_IMAGE_MARKER)
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"!\[[^\]]*\]\(\s*([^)\s]+)\s*\)").expect("reply: static regex must compile")
    })
}

/// URLs of every markdown image in `text`, in order of appearance.
pub fn image_urls(text: &str) -> Vec<String> {
    image_pattern()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Text suitable for speech synthesis.
///
/// `None` for generated-image replies; otherwise the text with markdown
/// emphasis, heading and code markers removed.
pub fn speakable_text(text: &str) -> Option<String> {
    if is_generated_image(text) {
        return None;
    }
    Some(text.chars().filter(|c| !matches!(c, '*' | '#' | '`')).collect())
}

/// What to put on the clipboard for a reply.
///
/// Generated-image replies copy the image URL(s), one per line; anything
/// else is copied verbatim.
pub fn clipboard_text(text: &str) -> String {
    if is_generated_image(text) {
        let urls = image_urls(text);
        if !urls.is_empty() {
            return urls.join("\n");
        }
    }
    text.to_string()
}
