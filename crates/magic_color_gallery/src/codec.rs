//! Serialized layout of the gallery.
//!
//! The collection is a JSON array of records in gallery order:
//!
//! ```json
//! [{"id":"…","prompt":"…","lineArtUrl":"…","coloredUrl":"…","createdAt":1700000000000}]
//! ```

use magic_color_core::ColoringPage;
use magic_color_error::JsonError;

/// Serialize pages in order.
pub fn encode<'a>(pages: impl IntoIterator<Item = &'a ColoringPage>) -> Result<String, JsonError> {
    let pages: Vec<&ColoringPage> = pages.into_iter().collect();
    serde_json::to_string(&pages).map_err(|e| JsonError::new(e.to_string()))
}

/// Deserialize a collection written by [`encode`].
pub fn decode(raw: &str) -> Result<Vec<ColoringPage>, JsonError> {
    serde_json::from_str(raw).map_err(|e| JsonError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use magic_color_core::ImageRef;

    #[test]
    fn round_trip_preserves_order_and_colors() {
        let mut colored = ColoringPage::from_parts(
            "b",
            "A castle in the clouds",
            ImageRef::inline("image/png", "AAAA"),
            2,
        );
        colored.attach_colored(ImageRef::inline("image/png", "BBBB"));
        let plain = ColoringPage::from_parts(
            "a",
            "A space rocket landing",
            ImageRef::Remote("https://example.com/rocket.png".to_string()),
            1,
        );
        let pages = vec![colored, plain];

        let raw = encode(&pages).unwrap();
        assert_eq!(decode(&raw).unwrap(), pages);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("{not json").is_err());
        assert!(decode(r#"{"id":"1"}"#).is_err());
        assert!(decode(r#"[{"id":"1","prompt":"x","lineArtUrl":"nope","createdAt":0}]"#).is_err());
    }
}
