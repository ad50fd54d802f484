use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeMenuRequest {
    /// Publicly retrievable URL of the menu photo
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_urls() {
        let request = AnalyzeMenuRequest {
            image_url: "https://cdn.example.com/menus/lunch.jpg".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_and_relative_urls() {
        for image_url in ["", "menus/lunch.jpg"] {
            let request = AnalyzeMenuRequest {
                image_url: image_url.to_string(),
            };
            assert!(request.validate().is_err(), "accepted {image_url:?}");
        }
    }
}
