/// Fallback shown when the model returns nothing for a content prompt.
pub const CONTENT_FALLBACK: &str = "Classification failed.";

/// Fallback category when the model returns nothing for a URL prompt.
pub const URL_FALLBACK: &str = "unknown";

/// Normalize the model's reply to a content-classification prompt.
///
/// Content replies are full sentences, so they are only trimmed -- case is
/// preserved. An empty reply maps to [`CONTENT_FALLBACK`].
pub fn content_message(reply: &str) -> String {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        CONTENT_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize the model's reply to a URL-classification prompt.
///
/// URL replies are single category tokens: trimmed and lowercased so that
/// the rendered class is stable regardless of how the model cased it. An
/// empty reply maps to [`URL_FALLBACK`].
pub fn url_category(reply: &str) -> String {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        URL_FALLBACK.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_message_trims() {
        assert_eq!(
            content_message("  This is a scam because it asks for payment.  \n"),
            "This is a scam because it asks for payment."
        );
    }

    #[test]
    fn test_content_message_preserves_case() {
        assert_eq!(content_message("This is REAL."), "This is REAL.");
    }

    #[test]
    fn test_content_message_empty_falls_back() {
        assert_eq!(content_message(""), CONTENT_FALLBACK);
        assert_eq!(content_message("   \n\t"), CONTENT_FALLBACK);
    }

    #[test]
    fn test_url_category_trims_and_lowercases() {
        assert_eq!(url_category("  PHISHING  "), "phishing");
        assert_eq!(url_category("Benign\n"), "benign");
    }

    #[test]
    fn test_url_category_empty_falls_back() {
        assert_eq!(url_category(""), URL_FALLBACK);
        assert_eq!(url_category("  "), URL_FALLBACK);
    }

    #[test]
    fn test_url_category_passes_through_unexpected_tokens() {
        // The category set is instruction-level only; anything the model
        // says comes through lowercased.
        assert_eq!(url_category("Suspicious"), "suspicious");
    }
}
