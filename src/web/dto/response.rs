//! Response DTOs for the Quill web API.

use serde::Serialize;

use crate::posts::{text_preview, Group, Page, PostFormErrors, PostListing};
use crate::db::User;

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of a listing with navigation metadata.
#[derive(Debug, Serialize)]
pub struct PageView<T: Serialize> {
    /// Items on this page, in listing order.
    pub items: Vec<T>,
    /// 1-based page number.
    pub number: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageView<PostView> {
    /// Build a page view from a page of joined post rows.
    pub fn from_listings(page: Page<PostListing>) -> Self {
        Self {
            number: page.number,
            total_pages: page.total_pages,
            total_items: page.total_items,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            items: page.items.into_iter().map(PostView::from).collect(),
        }
    }
}

// ============================================================================
// Auth DTOs
// ============================================================================

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Access token (JWT).
    pub access_token: String,
    /// Token type, always "Bearer".
    pub token_type: String,
    /// Access token expiry in seconds.
    pub expires_in: u64,
    /// User information.
    pub user: UserInfo,
}

/// User information in responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Account creation timestamp.
    pub created_at: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Post and Group DTOs
// ============================================================================

/// Post author in responses.
#[derive(Debug, Serialize)]
pub struct AuthorView {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
}

/// Group in responses.
#[derive(Debug, Serialize)]
pub struct GroupView {
    /// Group ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Free-text description.
    pub description: String,
}

impl From<Group> for GroupView {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            slug: group.slug,
            description: group.description,
        }
    }
}

/// Group reference attached to a post.
#[derive(Debug, Serialize)]
pub struct GroupRef {
    /// Group ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// URL-safe identifier.
    pub slug: String,
}

/// Post in responses.
#[derive(Debug, Serialize)]
pub struct PostView {
    /// Post ID.
    pub id: i64,
    /// Full post content.
    pub text: String,
    /// Display representation (first 15 characters).
    pub preview: String,
    /// Publication timestamp.
    pub pub_date: String,
    /// Post author.
    pub author: AuthorView,
    /// Group the post belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRef>,
}

impl From<PostListing> for PostView {
    fn from(listing: PostListing) -> Self {
        let group = match (listing.group_id, listing.group_title, listing.group_slug) {
            (Some(id), Some(title), Some(slug)) => Some(GroupRef { id, title, slug }),
            _ => None,
        };
        Self {
            id: listing.id,
            preview: text_preview(&listing.text),
            text: listing.text,
            pub_date: listing.pub_date,
            author: AuthorView {
                id: listing.author_id,
                username: listing.author_username,
            },
            group,
        }
    }
}

// ============================================================================
// Page DTOs
// ============================================================================

/// Home page: the most recent posts across all groups.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    /// Page title.
    pub title: String,
    /// Paginated posts.
    pub page: PageView<PostView>,
}

/// Group page: a group's details and its posts.
#[derive(Debug, Serialize)]
pub struct GroupPage {
    /// The group.
    pub group: GroupView,
    /// Paginated posts in the group.
    pub page: PageView<PostView>,
}

/// Profile page: an author's details and their posts.
#[derive(Debug, Serialize)]
pub struct ProfilePage {
    /// The author.
    pub author: AuthorView,
    /// Total number of posts by the author.
    pub post_count: u64,
    /// Paginated posts by the author.
    pub page: PageView<PostView>,
}

/// Post detail page.
#[derive(Debug, Serialize)]
pub struct PostDetailPage {
    /// The post.
    pub post: PostView,
    /// Total number of posts by the post's author.
    pub author_post_count: u64,
}

/// Post form page, rendered blank or with the submitted values and
/// their validation errors.
#[derive(Debug, Serialize)]
pub struct PostFormPage {
    /// Submitted (or current) text value.
    pub text: String,
    /// Submitted (or current) group value.
    pub group: Option<i64>,
    /// Field-level validation errors.
    pub errors: PostFormErrors,
    /// Groups available for selection.
    pub groups: Vec<GroupView>,
    /// Whether the form edits an existing post.
    pub is_edit: bool,
}
