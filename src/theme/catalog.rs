//! The fixed, ordered theme catalog.
//!
//! Variation ordinals index into the catalog modulo its size, so the
//! catalog never runs out and its order is part of the product: the
//! first three themes are what a fresh generation round wears.

use crate::theme::Theme;

/// An ordered, immutable set of themes.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new("Ocean", "#3B82F6", "#06B6D4", "#14B8A6", "#1A1A1A"),
                Theme::new("Sunset", "#F97316", "#EC4899", "#EF4444", "#1A1A1A"),
                Theme::new("Forest", "#10B981", "#34D399", "#14B8A6", "#1A1A1A"),
                Theme::new("Lavender", "#8B5CF6", "#6366F1", "#EC4899", "#1A1A1A"),
                Theme::new("Midnight", "#6366F1", "#8B5CF6", "#3B82F6", "#0D0D0D"),
                Theme::new("Rose", "#EC4899", "#EF4444", "#F97316", "#1A1A1A"),
            ],
        }
    }
}

impl ThemeCatalog {
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// The catalog's first theme, the default selection for a new session.
    pub fn default_theme(&self) -> Theme {
        self.themes[0].clone()
    }

    /// Theme assigned to a 1-based variation ordinal when the request
    /// carried no explicit theme hint.
    pub fn theme_for(&self, variation_index: u32) -> Theme {
        let idx = (variation_index.saturating_sub(1) as usize) % self.themes.len();
        self.themes[idx].clone()
    }
}
