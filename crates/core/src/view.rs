use serde::Serialize;

/// Inputs for a single render of the result page.
///
/// Three independent display strings; each route populates at most the
/// fields relevant to it and leaves the rest empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Status or classification sentence (content flow, and error texts).
    pub message: String,
    /// Lowercase category token (URL flow).
    pub predicted_class: String,
    /// The URL the user submitted, echoed back into the form.
    pub input_url: String,
}

impl PageView {
    /// The home page: nothing classified yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A content-flow render: result sentence or error text as the message.
    pub fn message(message: impl Into<String>) -> Self {
        PageView {
            message: message.into(),
            ..Self::default()
        }
    }

    /// A URL-flow render: category verdict plus the echoed URL.
    pub fn url_verdict(predicted_class: impl Into<String>, input_url: impl Into<String>) -> Self {
        PageView {
            predicted_class: predicted_class.into(),
            input_url: input_url.into(),
            ..Self::default()
        }
    }

    /// A rejected URL submission: error text plus the echoed (bad) URL.
    pub fn url_error(message: impl Into<String>, input_url: impl Into<String>) -> Self {
        PageView {
            message: message.into(),
            input_url: input_url.into(),
            ..Self::default()
        }
    }
}
