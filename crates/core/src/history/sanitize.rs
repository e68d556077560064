//! Input sanitization for history records.
//!
//! History entries are written by the playback UI and later rendered back
//! into it, so free text must never carry markup and image paths must never
//! carry anything but a bare metadata-service path segment.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Maximum length (in characters) of free-text fields.
pub const MAX_TEXT_LEN: usize = 500;
/// Highest accepted season number (0 covers specials).
pub const MAX_SEASON_NUMBER: u32 = 100;
/// Lowest accepted episode number.
pub const MIN_EPISODE_NUMBER: u32 = 1;
/// Highest accepted episode number.
pub const MAX_EPISODE_NUMBER: u32 = 1000;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static IMAGE_PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[A-Za-z0-9_.-]+$").unwrap());

/// Strip tag-like substrings and truncate to the field limit.
pub fn clean_text(input: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(input, "");
    if stripped.chars().count() > MAX_TEXT_LEN {
        stripped.chars().take(MAX_TEXT_LEN).collect()
    } else {
        stripped.into_owned()
    }
}

/// Accept an image path only when it is a single path segment under the
/// image base URL. Anything else is discarded, never stored verbatim.
pub fn clean_image_path(input: &str) -> Option<String> {
    if is_valid_image_path(input) {
        Some(input.to_string())
    } else {
        None
    }
}

pub fn is_valid_image_path(input: &str) -> bool {
    IMAGE_PATH_PATTERN.is_match(input)
}

/// Clamp a progress ratio into [0, 1]. Non-finite input becomes 0.
pub fn clamp_progress(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Clamp a season number into the accepted range.
pub fn clamp_season(value: u32) -> u32 {
    value.min(MAX_SEASON_NUMBER)
}

/// Clamp an episode number into the accepted range.
pub fn clamp_episode(value: u32) -> u32 {
    value.clamp(MIN_EPISODE_NUMBER, MAX_EPISODE_NUMBER)
}
