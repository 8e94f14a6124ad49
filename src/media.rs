use url::Url;

/// Shown when a property has no images at all.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1770&q=80";

/// Resolve a stored image reference to a public URL. References that are
/// already absolute URLs pass through untouched; bare paths get the
/// configured base prefixed.
pub fn resolve_image_url(base_url: &str, reference: &str) -> String {
    if Url::parse(reference).is_ok() {
        return reference.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

/// The card/cover image for a record: first stored reference, resolved,
/// or the fallback when the list is empty.
pub fn cover_image_url(base_url: &str, images: &[String]) -> String {
    match images.first() {
        Some(reference) => resolve_image_url(base_url, reference),
        None => FALLBACK_IMAGE.to_string(),
    }
}
