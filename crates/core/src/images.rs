//! Image URL construction.
//!
//! Poster and backdrop paths coming out of the metadata service are bare
//! path segments; turning them into absolute URLs needs a base URL and a
//! size tier. The tier is decided once at startup through [`ImageSettings`]
//! and threaded through explicitly, never probed at call time.

use serde::{Deserialize, Serialize};

/// Image URL configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSettings {
    /// Image base URL (default: https://image.tmdb.org/t/p).
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    /// Size tier served to clients.
    #[serde(default)]
    pub quality: ImageQuality,
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
            quality: ImageQuality::default(),
        }
    }
}

/// Size tier for served images.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    /// Smaller variants for constrained devices or links.
    Low,
    #[default]
    Standard,
}

/// Builds absolute poster and backdrop URLs.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
    poster_size: &'static str,
    backdrop_size: &'static str,
}

impl ImageUrlBuilder {
    pub fn new(settings: &ImageSettings) -> Self {
        let (poster_size, backdrop_size) = match settings.quality {
            ImageQuality::Low => ("w185", "w780"),
            ImageQuality::Standard => ("w342", "w1280"),
        };
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            poster_size,
            backdrop_size,
        }
    }

    /// Absolute URL for a validated poster path (leading slash included).
    pub fn poster_url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.poster_size, path)
    }

    /// Absolute URL for a validated backdrop path (leading slash included).
    pub fn backdrop_url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.backdrop_size, path)
    }
}
