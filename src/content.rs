// Static site content embedded in the binary
//
// The original site keeps its FAQ entries, gallery items, testimonials and
// add-on catalog as in-memory data defined at load time. Here the same data
// lives in content.json, bundled with include_str! and deserialized once at
// startup.
//
// Each section is parsed independently: a section that is missing or fails
// to deserialize yields an empty list and a warning, and every other panel
// still initializes (wrap-and-continue, never abort-all).

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Bundled content, compiled into the binary
const CONTENT_JSON: &str = include_str!("content.json");

/// Category an FAQ entry belongs to
///
/// `All` is a filter selector on the tab bar, never an entry's own
/// category, so it lives on `CategoryTab` in the faq module instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Services,
    Pricing,
    Booking,
}

impl FaqCategory {
    /// Display label for tab controls
    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::Services => "الخدمات",
            FaqCategory::Pricing => "الأسعار",
            FaqCategory::Booking => "الحجز",
        }
    }
}

/// A single question/answer record (immutable after load)
#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
}

/// A gallery item: caption plus the detail text shown in the lightbox
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub caption: String,
    pub detail: String,
}

/// A customer testimonial card
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    /// Star rating, 1-5
    pub rating: u8,
    pub text: String,
}

/// An optional add-on service with its flat cost in SAR
#[derive(Debug, Clone, Deserialize)]
pub struct Addon {
    pub name: String,
    pub cost: u32,
}

/// All site content, one field per page section
#[derive(Debug, Default)]
pub struct SiteContent {
    pub faq: Vec<FaqEntry>,
    pub gallery: Vec<GalleryItem>,
    pub testimonials: Vec<Testimonial>,
    pub addons: Vec<Addon>,
}

impl SiteContent {
    /// Load the bundled content
    pub fn load() -> Self {
        Self::from_json(CONTENT_JSON)
    }

    /// Parse content from a JSON document, section by section
    pub fn from_json(raw: &str) -> Self {
        let root: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Site content is not valid JSON, all sections empty: {}", e);
                return Self::default();
            }
        };

        Self {
            faq: section(&root, "faq"),
            gallery: section(&root, "gallery"),
            testimonials: section(&root, "testimonials"),
            addons: section(&root, "addons"),
        }
    }
}

/// Deserialize one content section, degrading to empty on any failure
fn section<T: DeserializeOwned>(root: &Value, key: &str) -> Vec<T> {
    match root.get(key) {
        Some(value) => match serde_json::from_value::<Vec<T>>(value.clone()) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Content section '{}' failed to parse, panel will be empty: {}", key, e);
                Vec::new()
            }
        },
        None => {
            tracing::warn!("Content section '{}' missing, panel will be empty", key);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::load();
        assert!(!content.faq.is_empty());
        assert!(!content.gallery.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(!content.addons.is_empty());
    }

    #[test]
    fn broken_section_does_not_sink_the_rest() {
        // "faq" is malformed (entry missing fields), the others are fine
        let raw = r#"{
            "faq": [{"question": "q"}],
            "gallery": [{"caption": "c", "detail": "d"}],
            "testimonials": [],
            "addons": [{"name": "a", "cost": 80}]
        }"#;
        let content = SiteContent::from_json(raw);
        assert!(content.faq.is_empty());
        assert_eq!(content.gallery.len(), 1);
        assert_eq!(content.addons.len(), 1);
    }

    #[test]
    fn invalid_json_gives_empty_content() {
        let content = SiteContent::from_json("not json");
        assert!(content.faq.is_empty());
        assert!(content.gallery.is_empty());
    }

    #[test]
    fn ratings_are_within_star_range() {
        let content = SiteContent::load();
        for t in &content.testimonials {
            assert!((1..=5).contains(&t.rating), "{} has rating {}", t.name, t.rating);
        }
    }
}
