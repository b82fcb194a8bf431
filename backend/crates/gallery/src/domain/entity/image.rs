//! Image Entity
//!
//! An image as listed by the image API.

use serde::{Deserialize, Serialize};

/// Longest image id accepted in a request path
pub const MAX_IMAGE_ID_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub title: String,
    pub file_name: String,
}

/// Whether `id` is safe to place in an API path segment
pub fn is_valid_image_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_IMAGE_ID_LENGTH
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_id_validation() {
        assert!(is_valid_image_id("d6c6f7a4-5e1c-4ac1-8a84-1c4f1dd4a8a9"));
        assert!(!is_valid_image_id(""));
        assert!(!is_valid_image_id("../admin"));
        assert!(!is_valid_image_id("a b"));
        assert!(!is_valid_image_id(&"a".repeat(MAX_IMAGE_ID_LENGTH + 1)));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":"1","title":"Tulips","fileName":"tulips.jpg"}"#;
        let image: Image = serde_json::from_str(json).unwrap();
        assert_eq!(image.file_name, "tulips.jpg");
    }
}
