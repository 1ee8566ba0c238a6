//! Shared UI icons and emojis.
//!
//! Emoji constants with plain-text fallbacks for terminals that cannot
//! render them, plus the glyph mapping for app icon symbols.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN]");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");

// Flow indicators
pub static MIC: Emoji<'_, '_> = Emoji("🎙️  ", "[REC]");
pub static PALETTE: Emoji<'_, '_> = Emoji("🎨 ", "[THEME]");
pub static APP: Emoji<'_, '_> = Emoji("📱 ", "[APP]");

/// Terminal glyph for an app icon symbol name.
pub fn symbol_glyph(symbol: &str) -> &'static str {
    match symbol {
        "app.fill" => "▣",
        "star.fill" => "★",
        "bolt.fill" => "⚡",
        "heart.fill" => "♥",
        "sparkles" => "✦",
        "wand.and.stars" => "☆彡",
        "cpu.fill" => "▤",
        "cube.fill" => "◆",
        "globe" => "◯",
        _ => "·",
    }
}
