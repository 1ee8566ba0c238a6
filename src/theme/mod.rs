//! Theme rendering and non-regenerative theme application.
//!
//! A [`Theme`] is four colors and a name. Applying one to already
//! generated markup never goes back to the provider: the engine splices
//! a small `<style id="theme-override">` fragment into the document,
//! replacing any fragment a previous application left behind. The
//! splice is exact, so applying the same theme twice is byte-stable and
//! overrides never accumulate.

mod catalog;

pub use catalog::ThemeCatalog;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// Removal keys on the full open-to-close tag span of the injected
// fragment, first occurrence only. The optional newline on each side
// matches exactly the separators the insertion pass adds, so
// remove-then-insert is an identity on the rest of the document.
static OVERRIDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\n?<style id="theme-override">.*?</style>\n?"#).unwrap()
});

static HEAD_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head[^>]*>").unwrap());

static BODY_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<body").unwrap());

/// A color theme for generated apps. Colors are 6-hex-digit CSS codes
/// including the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl Theme {
    pub fn new(
        name: &str,
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
        }
    }

    /// Render the style fragment that repaints a generated app in this
    /// theme. CSS variables first for apps that use them, then blunt
    /// `!important` rules for apps that do not.
    pub fn override_fragment(&self) -> String {
        format!(
            r#"<style id="theme-override">
    :root {{
        --primary: {primary};
        --secondary: {secondary};
        --accent: {accent};
        --bg: {bg};
    }}
    body {{ background: linear-gradient(135deg, {primary}, {bg}) !important; }}
    button, .btn, [class*="button"] {{ background: {primary} !important; }}
    a, .link {{ color: {accent} !important; }}
    h1, h2, h3, .title {{ color: white !important; }}
    .card, .panel, [class*="card"] {{
        border-color: {secondary} !important;
        box-shadow: 0 0 20px {primary}33 !important;
    }}
</style>"#,
            primary = self.primary,
            secondary = self.secondary,
            accent = self.accent,
            bg = self.background,
        )
    }
}

/// Rewrite `markup` to carry `theme`'s override fragment.
///
/// Any previously injected fragment is removed first (first occurrence
/// only), then the new fragment is inserted after the first head-open
/// tag, or before the first body-open tag, or appended at the very end
/// when the document has neither.
pub fn apply_theme(markup: &str, theme: &Theme) -> String {
    let stripped = OVERRIDE_RE.replace(markup, "");
    let fragment = format!("\n{}\n", theme.override_fragment());

    if let Some(head) = HEAD_OPEN_RE.find(&stripped) {
        let mut out = String::with_capacity(stripped.len() + fragment.len());
        out.push_str(&stripped[..head.end()]);
        out.push_str(&fragment);
        out.push_str(&stripped[head.end()..]);
        return out;
    }

    if let Some(body) = BODY_OPEN_RE.find(&stripped) {
        let mut out = String::with_capacity(stripped.len() + fragment.len());
        out.push_str(&stripped[..body.start()]);
        out.push_str(&fragment);
        out.push_str(&stripped[body.start()..]);
        return out;
    }

    let mut out = stripped.into_owned();
    out.push_str(&fragment);
    out
}
