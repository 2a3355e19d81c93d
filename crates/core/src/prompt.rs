/// Build the model prompt for classifying uploaded text content.
///
/// Embeds the extracted text verbatim into a fixed instruction asking the
/// model to decide between Real/Legitimate and Scam/Fake and to answer with
/// one sentence plus a justification.
pub fn content_prompt(text: &str) -> String {
    format!(
        "You are an expert in identifying scam messages in text or email.\n\
         Classify this content as:\n\
         - Real/Legitimate\n\
         - Scam/Fake\n\
         \n\
         Text:\n\
         {text}\n\
         \n\
         Respond with one clear sentence stating if it's real or scam and why."
    )
}

/// Build the model prompt for classifying a URL.
///
/// Embeds the URL verbatim and instructs the model to return exactly one
/// lowercase category name out of the four it is given.
pub fn url_prompt(url: &str) -> String {
    format!(
        "You are an advanced AI trained to classify URLs for safety.\n\
         \n\
         Categories:\n\
         - benign (safe/trusted)\n\
         - phishing (fraudulent)\n\
         - malware (spreading harmful software)\n\
         - defacement (hacked websites)\n\
         \n\
         URL: {url}\n\
         \n\
         Return only one category name in lowercase."
    )
}
