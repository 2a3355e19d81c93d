/// True when the URL starts with a scheme the classifier accepts.
///
/// A case-sensitive prefix check for `http://` or `https://`, matching what
/// the URL form promises the user. Anything else (including uppercase
/// schemes) is rejected before a prompt is ever built.
pub fn has_supported_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
