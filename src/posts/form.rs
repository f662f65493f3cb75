//! Post submission form validation.
//!
//! The same form backs both creating and editing a post. Validation
//! needs database access to confirm the referenced group exists, so
//! the form is checked against a [`GroupRepository`] and yields either
//! a validated value or per-field error messages for re-rendering.

use serde::{Deserialize, Serialize};

use super::group_repository::GroupRepository;
use super::types::{NewPost, PostUpdate};
use crate::Result;

/// Raw post form input as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    /// Post content; required.
    #[serde(default)]
    pub text: String,
    /// Optional group ID.
    #[serde(default)]
    pub group: Option<i64>,
}

/// Per-field validation errors for the post form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostFormErrors {
    /// Error message for the text field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Error message for the group field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl PostFormErrors {
    /// Check if any field has an error.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.group.is_none()
    }
}

/// A post form that passed validation.
#[derive(Debug, Clone)]
pub struct ValidPostForm {
    text: String,
    group_id: Option<i64>,
}

impl ValidPostForm {
    /// Post content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Validated group reference.
    pub fn group_id(&self) -> Option<i64> {
        self.group_id
    }

    /// Convert into data for creating a post by the given author.
    pub fn into_new_post(self, author_id: i64) -> NewPost {
        NewPost::new(self.text, author_id, self.group_id)
    }

    /// Convert into data for updating an existing post.
    pub fn into_update(self) -> PostUpdate {
        PostUpdate::new().text(self.text).group_id(self.group_id)
    }
}

/// Result of validating a [`PostForm`].
#[derive(Debug, Clone)]
pub enum FormOutcome {
    /// All fields are valid.
    Valid(ValidPostForm),
    /// One or more fields failed validation.
    Invalid(PostFormErrors),
}

impl PostForm {
    /// Validate the form against the database.
    ///
    /// The text must be non-empty after trimming, and the group (when
    /// given) must reference an existing group.
    pub async fn validate(&self, groups: &GroupRepository<'_>) -> Result<FormOutcome> {
        let mut errors = PostFormErrors::default();

        if self.text.trim().is_empty() {
            errors.text = Some("This field is required".to_string());
        }

        if let Some(group_id) = self.group {
            if !groups.exists(group_id).await? {
                errors.group = Some("Selected group does not exist".to_string());
            }
        }

        if errors.is_empty() {
            Ok(FormOutcome::Valid(ValidPostForm {
                text: self.text.clone(),
                group_id: self.group,
            }))
        } else {
            Ok(FormOutcome::Invalid(errors))
        }
    }
}
