//! App icon candidates.
//!
//! An icon is a symbol name plus a background color. Candidates are
//! derived from the selected theme so the icon grid always matches the
//! app the user is about to save.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Symbol names offered for every theme, in display order.
const SYMBOLS: &[&str] = &[
    "app.fill",
    "star.fill",
    "bolt.fill",
    "heart.fill",
    "sparkles",
    "wand.and.stars",
    "cpu.fill",
    "cube.fill",
    "globe",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub symbol: String,
    /// 6-hex-digit CSS color, `#`-prefixed.
    pub color: String,
}

impl Icon {
    /// Icon candidates for a theme: the fixed symbol set, each colored
    /// with the theme's primary color.
    pub fn candidates_for(theme: &Theme) -> Vec<Icon> {
        SYMBOLS
            .iter()
            .map(|symbol| Icon {
                symbol: symbol.to_string(),
                color: theme.primary.clone(),
            })
            .collect()
    }
}
