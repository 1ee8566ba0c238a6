//! Deterministic placeholder candidates.
//!
//! When every generation request fails, the review phase still needs
//! something to show. These pages are generated locally, carry the same
//! structure as provider output (doctype, head, inline style), and are
//! stable across runs.

use crate::flow::Candidate;
use crate::theme::ThemeCatalog;

const PLACEHOLDERS: &[(&str, &str)] = &[
    ("Version A", "#3B82F6"),
    ("Version B", "#8B5CF6"),
    ("Version C", "#10B981"),
];

/// Build the fixed placeholder candidates, themed from the catalog in
/// ordinal order like a successful round would be.
pub fn fallback_candidates(catalog: &ThemeCatalog) -> Vec<Candidate> {
    PLACEHOLDERS
        .iter()
        .enumerate()
        .map(|(i, (title, color))| {
            let ordinal = i as u32 + 1;
            Candidate::new(
                ordinal,
                placeholder_markup(title, color),
                catalog.theme_for(ordinal),
            )
        })
        .collect()
}

fn placeholder_markup(title: &str, color: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, sans-serif;
            background: linear-gradient(135deg, {color}, #1F2937);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            color: white;
            padding: 20px;
        }}
        h1 {{ font-size: 2rem; margin-bottom: 1rem; }}
        p {{ opacity: 0.8; text-align: center; }}
        .card {{
            background: rgba(255,255,255,0.1);
            backdrop-filter: blur(10px);
            border-radius: 16px;
            padding: 24px;
            margin-top: 24px;
            width: 100%;
            max-width: 300px;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p>Your vibe-coded app is ready!</p>
    <div class="card">
        <p>This is a preview of your generated application.</p>
    </div>
</body>
</html>"#
    )
}
