//! Group and Post models for Quill.

use std::fmt;

/// Number of characters shown in a post's display representation.
pub const PREVIEW_CHARS: usize = 15;

/// Truncate text to its display representation (first 15 characters).
pub fn text_preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Group (community) entity that posts may optionally belong to.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Group {
    /// Unique group ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Unique URL-safe identifier; stable once assigned.
    pub slug: String,
    /// Free-text description.
    pub description: String,
    /// Group creation timestamp.
    pub created_at: String,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Data for creating a new group.
#[derive(Debug, Clone)]
pub struct NewGroup {
    /// Display title.
    pub title: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Free-text description.
    pub description: String,
}

impl NewGroup {
    /// Create a new group record with required fields.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }
}

/// Post entity representing an authored text entry.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Post content.
    pub text: String,
    /// Publication timestamp, set at creation and never changed.
    pub pub_date: String,
    /// ID of the user who created the post; never changed.
    pub author_id: i64,
    /// Optional group the post belongs to.
    pub group_id: Option<i64>,
}

impl Post {
    /// Display representation: the first 15 characters of the content.
    pub fn preview(&self) -> String {
        text_preview(&self.text)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preview())
    }
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post content.
    pub text: String,
    /// ID of the creating user.
    pub author_id: i64,
    /// Optional group reference.
    pub group_id: Option<i64>,
}

impl NewPost {
    /// Create a new post record with required fields.
    pub fn new(text: impl Into<String>, author_id: i64, group_id: Option<i64>) -> Self {
        Self {
            text: text.into(),
            author_id,
            group_id,
        }
    }
}

/// Data for updating an existing post.
///
/// `author_id` and `pub_date` are immutable and deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    /// New content.
    pub text: Option<String>,
    /// New group reference (Some(None) clears the group).
    pub group_id: Option<Option<i64>>,
}

impl PostUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set new group reference.
    pub fn group_id(mut self, group_id: Option<i64>) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.group_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(text: &str) -> Post {
        Post {
            id: 1,
            text: text.to_string(),
            pub_date: "2024-01-01 00:00:00".to_string(),
            author_id: 1,
            group_id: None,
        }
    }

    #[test]
    fn test_post_preview_truncates_to_15_chars() {
        let post = sample_post("A post that is much longer than fifteen characters");
        assert_eq!(post.preview(), "A post that is ");
        assert_eq!(post.preview().chars().count(), 15);
    }

    #[test]
    fn test_post_preview_short_text() {
        let post = sample_post("short");
        assert_eq!(post.preview(), "short");
    }

    #[test]
    fn test_post_preview_multibyte() {
        // Truncation counts characters, not bytes
        let post = sample_post("Тестовый пост про группы");
        assert_eq!(post.preview(), "Тестовый пост п");
    }

    #[test]
    fn test_post_display() {
        let post = sample_post("A post that is much longer than fifteen characters");
        assert_eq!(post.to_string(), "A post that is ");
    }

    #[test]
    fn test_group_display_is_title() {
        let group = Group {
            id: 1,
            title: "Cats".to_string(),
            slug: "cats".to_string(),
            description: "All about cats".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        assert_eq!(group.to_string(), "Cats");
    }

    #[test]
    fn test_new_post() {
        let post = NewPost::new("Hello", 3, Some(2));
        assert_eq!(post.text, "Hello");
        assert_eq!(post.author_id, 3);
        assert_eq!(post.group_id, Some(2));
    }

    #[test]
    fn test_post_update_empty() {
        let update = PostUpdate::new();
        assert!(update.is_empty());
    }

    #[test]
    fn test_post_update_text() {
        let update = PostUpdate::new().text("New text");
        assert_eq!(update.text, Some("New text".to_string()));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_post_update_clear_group() {
        let update = PostUpdate::new().group_id(None);
        assert_eq!(update.group_id, Some(None));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_post_update_combined() {
        let update = PostUpdate::new().text("New text").group_id(Some(2));
        assert_eq!(update.text, Some("New text".to_string()));
        assert_eq!(update.group_id, Some(Some(2)));
    }
}
