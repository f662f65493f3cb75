//! Posts domain module for Quill.
//!
//! Groups (communities), posts, pagination, and the post submission form.

mod form;
mod group_repository;
mod pagination;
mod post_repository;
mod types;

pub use form::{FormOutcome, PostForm, PostFormErrors, ValidPostForm};
pub use group_repository::GroupRepository;
pub use pagination::{Page, Paginator, DEFAULT_PAGE_SIZE};
pub use post_repository::{PostListing, PostRepository};
pub use types::{text_preview, Group, NewGroup, NewPost, Post, PostUpdate, PREVIEW_CHARS};
