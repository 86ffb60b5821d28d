//! Blog request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    MAX_BLOG_CONTENT_LENGTH, MAX_BLOG_SYNOPSIS_LENGTH, MAX_BLOG_TITLE_LENGTH, MAX_COMMENT_LENGTH,
};

/// Create blog request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[validate(
        length(max = MAX_BLOG_TITLE_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Title is required")
    )]
    pub title: String,

    #[validate(
        length(max = MAX_BLOG_SYNOPSIS_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Synopsis is required")
    )]
    pub synopsis: String,

    #[validate(
        length(max = MAX_BLOG_CONTENT_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Blog content is required")
    )]
    pub content: String,

    #[validate(url(message = "Featured image must be a valid URL"))]
    pub featured_image_url: Option<String>,

    pub category_id: Option<Uuid>,
}

/// Update blog request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    #[validate(
        length(max = MAX_BLOG_TITLE_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Title cannot be blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(max = MAX_BLOG_SYNOPSIS_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Synopsis cannot be blank")
    )]
    pub synopsis: Option<String>,

    #[validate(
        length(max = MAX_BLOG_CONTENT_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Blog content cannot be blank")
    )]
    pub content: Option<String>,

    #[validate(url(message = "Featured image must be a valid URL"))]
    pub featured_image_url: Option<String>,

    pub category_id: Option<Uuid>,
}

/// Comment request. Only the count is kept.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(
        length(max = MAX_COMMENT_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Comment cannot be empty")
    )]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_text_fields() {
        let payload: CreateBlogRequest = serde_json::from_value(serde_json::json!({
            "title": "  ",
            "synopsis": "About things",
            "content": "# Hello"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(!errors.field_errors().contains_key("synopsis"));
    }

    #[test]
    fn test_create_request_accepts_optional_fields() {
        let payload: CreateBlogRequest = serde_json::from_value(serde_json::json!({
            "title": "Hello",
            "synopsis": "About things",
            "content": "# Hello",
            "featuredImageUrl": "https://img.example.com/a.png",
            "categoryId": "6f1c1e8e-8d0b-4d59-9f0e-5d2b3c9a1e11"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert!(payload.category_id.is_some());
    }

    #[test]
    fn test_update_request_allows_partial_body() {
        let payload: UpdateBlogRequest =
            serde_json::from_value(serde_json::json!({ "title": "New title" })).unwrap();

        assert!(payload.validate().is_ok());
        assert!(payload.content.is_none());
    }

    #[test]
    fn test_blank_comment_rejected() {
        let payload = CommentRequest {
            content: "\n ".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
