//! Blog response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Blog, BlogDetails, BlogStatus};

/// Blog row as returned by write endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub synopsis: String,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub status: BlogStatus,
    pub disabled_reason: Option<String>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub likes_count: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            user_id: blog.user_id,
            category_id: blog.category_id,
            title: blog.title,
            synopsis: blog.synopsis,
            content: blog.content,
            featured_image_url: blog.featured_image_url,
            status: blog.status,
            disabled_reason: blog.disabled_reason,
            disabled_at: blog.disabled_at,
            view_count: blog.view_count,
            likes_count: blog.likes_count,
            comments_count: blog.comments_count,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

/// Post author
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

/// Post category
#[derive(Debug, Serialize)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
}

/// Blog with author and category, as served by list and detail endpoints
#[derive(Debug, Serialize)]
pub struct BlogDetailsResponse {
    #[serde(flatten)]
    pub blog: BlogResponse,
    pub author: AuthorResponse,
    pub category: Option<CategoryRef>,
}

impl From<BlogDetails> for BlogDetailsResponse {
    fn from(details: BlogDetails) -> Self {
        let category = details
            .blog
            .category_id
            .zip(details.category_name)
            .map(|(id, name)| CategoryRef { id, name });

        Self {
            author: AuthorResponse {
                id: details.blog.user_id,
                first_name: details.author_first_name,
                last_name: details.author_last_name,
                username: details.author_username,
                email: details.author_email,
            },
            category,
            blog: details.blog.into(),
        }
    }
}

/// List of blogs
#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub success: bool,
    pub message: String,
    pub blogs: Vec<BlogDetailsResponse>,
    pub count: usize,
}

impl BlogListResponse {
    pub fn new(message: impl Into<String>, blogs: Vec<BlogDetails>) -> Self {
        let blogs: Vec<BlogDetailsResponse> = blogs.into_iter().map(Into::into).collect();
        Self {
            success: true,
            message: message.into(),
            count: blogs.len(),
            blogs,
        }
    }
}

/// Single blog with author and category
#[derive(Debug, Serialize)]
pub struct BlogDetailsEnvelope {
    pub success: bool,
    pub message: String,
    pub blog: BlogDetailsResponse,
}

/// Result of a write on a single blog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogMessageResponse {
    pub success: bool,
    pub message: String,
    pub blog_id: Uuid,
    pub blog: BlogResponse,
}

impl BlogMessageResponse {
    pub fn new(message: impl Into<String>, blog: Blog) -> Self {
        Self {
            success: true,
            message: message.into(),
            blog_id: blog.id,
            blog: blog.into(),
        }
    }
}

/// New value of an engagement counter
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<i64>,
}

impl EngagementResponse {
    fn empty(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            view_count: None,
            likes_count: None,
            comments_count: None,
        }
    }

    pub fn views(view_count: i64) -> Self {
        Self {
            view_count: Some(view_count),
            ..Self::empty("View recorded")
        }
    }

    pub fn likes(message: &str, likes_count: i64) -> Self {
        Self {
            likes_count: Some(likes_count),
            ..Self::empty(message)
        }
    }

    pub fn comments(comments_count: i64) -> Self {
        Self {
            comments_count: Some(comments_count),
            ..Self::empty("Comment added")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(category: Option<(Uuid, &str)>) -> BlogDetails {
        let now = Utc::now();
        BlogDetails {
            blog: Blog {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                category_id: category.map(|(id, _)| id),
                title: "Hello".to_string(),
                synopsis: "Intro".to_string(),
                content: "# Hello".to_string(),
                featured_image_url: None,
                status: BlogStatus::Active,
                disabled_reason: None,
                disabled_at: None,
                view_count: 3,
                likes_count: 1,
                comments_count: 0,
                created_at: now,
                updated_at: now,
            },
            author_first_name: "Ada".to_string(),
            author_last_name: "Lovelace".to_string(),
            author_username: "ada".to_string(),
            author_email: "ada@example.com".to_string(),
            category_name: category.map(|(_, name)| name.to_string()),
        }
    }

    #[test]
    fn test_details_flatten_and_camel_case() {
        let category_id = Uuid::new_v4();
        let response = BlogDetailsResponse::from(details(Some((category_id, "Tech"))));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["title"], "Hello");
        assert_eq!(json["viewCount"], 3);
        assert_eq!(json["status"], "active");
        assert_eq!(json["author"]["firstName"], "Ada");
        assert_eq!(json["category"]["name"], "Tech");
        assert_eq!(json["category"]["id"], category_id.to_string());
    }

    #[test]
    fn test_uncategorized_blog_has_null_category() {
        let json = serde_json::to_value(BlogDetailsResponse::from(details(None))).unwrap();
        assert!(json["category"].is_null());
    }

    #[test]
    fn test_engagement_response_only_carries_its_counter() {
        let json = serde_json::to_value(EngagementResponse::likes("Blog liked", 4)).unwrap();
        assert_eq!(json["likesCount"], 4);
        assert!(json.get("viewCount").is_none());
        assert!(json.get("commentsCount").is_none());
    }
}
