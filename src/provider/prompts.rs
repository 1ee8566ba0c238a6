//! Generation prompt templates.
//!
//! This module assembles the prompt sent to the generation provider for
//! one variation. Each variation gets its own creative direction
//! (aesthetic, animation approach, layout pattern) and its own color
//! set, both chosen as a pure function of the variation index, so three
//! concurrent requests for the same idea come back looking genuinely
//! different while prompt assembly stays deterministic and testable.

use crate::provider::GenerationRequest;

const AESTHETICS: &[&str] = &[
    "Bento box grid layout with asymmetric card sizes",
    "Flowing organic shapes with blob morphing animations",
    "Brutalist typography with oversized bold headlines",
    "Neomorphic soft UI with subtle shadows and insets",
    "Retro-futuristic with scanlines and CRT glow effects",
    "Minimalist with dramatic whitespace and single accent",
    "Gradient mesh backgrounds with floating elements",
    "Isometric 3D-style cards with perspective transforms",
    "Magazine editorial layout with mixed media feel",
    "Terminal/hacker aesthetic with monospace and green accents",
];

const ANIMATIONS: &[&str] = &[
    "Elements fade-scale in with staggered delays",
    "Smooth parallax scrolling effects",
    "Hover states with spring-bounce physics",
    "Subtle floating/breathing animations on key elements",
    "Typewriter text reveal on headings",
    "Cards flip or rotate on interaction",
    "Ripple effects on button clicks",
    "Elastic rubber-band pull interactions",
];

const LAYOUTS: &[&str] = &[
    "Full-screen hero section with scroll-reveal content",
    "Dashboard with multiple interactive widgets",
    "Card-based interface with swipe/drag capability",
    "Split-screen layout with contrasting sections",
    "Vertical timeline or step-by-step flow",
    "Masonry grid with varied content types",
    "Single column focus with floating action buttons",
];

const COLOR_SETS: &[(&str, &str, &str)] = &[
    ("Primary: #3B82F6", "Secondary: #1E40AF", "Accent: #60A5FA"),
    ("Primary: #8B5CF6", "Secondary: #6D28D9", "Accent: #A78BFA"),
    ("Primary: #10B981", "Secondary: #047857", "Accent: #34D399"),
];

/// Build the full prompt for one variation request: system scaffold,
/// creative direction, color instructions, then the user's idea.
pub fn build_variation_prompt(request: &GenerationRequest) -> String {
    let system = build_system_prompt(request);
    format!("{system}\n\nCreate a web app for: {}", request.prompt)
}

fn build_system_prompt(request: &GenerationRequest) -> String {
    let n = request.variation_index;

    let theme_colors = match &request.theme_hint {
        Some(theme) => format!(
            "Use these colors for the design:\n\
             - Primary: {}\n\
             - Secondary: {}\n\
             - Accent: {}",
            theme.primary, theme.secondary, theme.accent
        ),
        None => {
            let (primary, secondary, accent) =
                COLOR_SETS[(n.saturating_sub(1) as usize) % COLOR_SETS.len()];
            format!("Use these colors: {primary}, {secondary}, {accent}")
        }
    };

    let seed = n.saturating_sub(1) as usize;
    let aesthetic = AESTHETICS[(seed * 3) % AESTHETICS.len()];
    let animation = ANIMATIONS[(seed * 5) % ANIMATIONS.len()];
    let layout = LAYOUTS[(seed * 2) % LAYOUTS.len()];

    format!(
        "You are Flash UI - an ELITE creative web app designer. Generate a COMPLETE, \
         production-quality web application.\n\
         \n\
         **CREATIVE DIRECTION FOR VARIATION {n}:**\n\
         - Visual Style: {aesthetic}\n\
         - Animation Approach: {animation}\n\
         - Layout Pattern: {layout}\n\
         \n\
         **CRITICAL REQUIREMENTS:**\n\
         1. Return ONLY raw HTML - no markdown, no code fences, no explanations\n\
         2. Start with <!DOCTYPE html> and end with </html>\n\
         3. All CSS in <style> tag, all JS in <script> tag\n\
         4. MUST be fully functional with REAL interactive JavaScript:\n\
            - Buttons must DO something when clicked\n\
            - Forms must handle input\n\
            - Include at least one dynamic/interactive feature\n\
         5. **JAVASCRIPT MUST WORK:** Use DOMContentLoaded, proper event listeners, no syntax errors\n\
         6. Mobile-first, responsive design (use viewport meta tag)\n\
         7. Import a Google Font that matches your aesthetic\n\
         8. Include micro-animations and hover states\n\
         \n\
         {theme_colors}\n\
         \n\
         **MAKE IT UNIQUE:**\n\
         - This is variation {n} of 3 - it must look COMPLETELY DIFFERENT from standard templates\n\
         - Be bold and creative with the visual design\n\
         - Surprise the user with interesting interactions\n\
         - Avoid generic bootstrap-style layouts\n\
         \n\
         Start with <!DOCTYPE html> and end with </html>. NO other text."
    )
}
