//! Markup recovery from model output.
//!
//! Models are asked for bare markup but return it three other ways
//! often enough to matter: wrapped in a fenced code block, embedded in
//! prose, or with leading whitespace. Extraction tries each shape in
//! order and falls back to the raw text so a surprising-but-renderable
//! response is never discarded.

/// Extract document markup from a model response.
///
/// Order of attempts:
/// 1. already bare markup (starts with a doctype or `<html`)
/// 2. a ```` ```html ```` fenced block
/// 3. the first doctype-to-`</html>` span embedded in other text
/// 4. the raw text unchanged
pub fn extract_markup(text: &str) -> String {
    let trimmed = text.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("<!doctype") || lowered.starts_with("<html") {
        return trimmed.to_string();
    }

    if let Some(fence_start) = text.find("```html") {
        let after_fence = fence_start + "```html".len();
        if let Some(fence_len) = text[after_fence..].find("```") {
            return text[after_fence..after_fence + fence_len].trim().to_string();
        }
    }

    let haystack = text.to_ascii_lowercase();
    if let Some(doctype_at) = haystack.find("<!doctype html>") {
        if let Some(close_len) = haystack[doctype_at..].find("</html>") {
            let end = doctype_at + close_len + "</html>".len();
            return text[doctype_at..end].to_string();
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = "<!DOCTYPE html>\n<html><body>hi</body></html>";

    #[test]
    fn bare_markup_passes_through_trimmed() {
        assert_eq!(extract_markup(BARE), BARE);
        assert_eq!(extract_markup(&format!("\n\n{BARE}\n")), BARE);
    }

    #[test]
    fn html_without_doctype_passes_through() {
        let doc = "<html><body>x</body></html>";
        assert_eq!(extract_markup(doc), doc);
    }

    #[test]
    fn fenced_block_is_unwrapped() {
        let wrapped = format!("Here is your app:\n```html\n{BARE}\n```\nEnjoy!");
        assert_eq!(extract_markup(&wrapped), BARE);
    }

    #[test]
    fn embedded_document_span_is_extracted() {
        let noisy = format!("Sure thing! {BARE} Let me know if you want changes.");
        assert_eq!(extract_markup(&noisy), BARE);
    }

    #[test]
    fn doctype_match_is_case_insensitive() {
        let doc = "prefix <!doctype html><html></html> suffix";
        assert_eq!(extract_markup(doc), "<!doctype html><html></html>");
    }

    #[test]
    fn unrecognizable_text_is_returned_as_is() {
        let text = "I could not generate an app for that.";
        assert_eq!(extract_markup(text), text);
    }

    #[test]
    fn unterminated_fence_falls_through_to_raw() {
        let text = "```html\n<div>never closed";
        assert_eq!(extract_markup(text), text);
    }
}
