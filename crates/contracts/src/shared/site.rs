use serde::{Deserialize, Serialize};

/// Gallery image served by the image host. Read-only; failures degrade to an
/// empty gallery rather than blocking the page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Public host profile shown on the marketing pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostProfile {
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub languages: Vec<String>,
}
