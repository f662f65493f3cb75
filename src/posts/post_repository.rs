//! Post repository for Quill.
//!
//! Listings are newest-first by publication date, with ID as the
//! tiebreak so posts published in the same second keep a stable order.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::types::{NewPost, Post, PostUpdate};
use crate::{QuillError, Result};

/// A post row joined with its author and group for listing pages.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostListing {
    /// Unique post ID.
    pub id: i64,
    /// Post content.
    pub text: String,
    /// Publication timestamp.
    pub pub_date: String,
    /// ID of the authoring user.
    pub author_id: i64,
    /// Username of the authoring user.
    pub author_username: String,
    /// Optional group the post belongs to.
    pub group_id: Option<i64>,
    /// Title of the group, if any.
    pub group_title: Option<String>,
    /// Slug of the group, if any.
    pub group_slug: Option<String>,
}

const LISTING_SELECT: &str = "SELECT p.id, p.text, p.pub_date, p.author_id,
        u.username AS author_username,
        p.group_id, g.title AS group_title, g.slug AS group_slug
     FROM posts p
     JOIN users u ON u.id = p.author_id
     LEFT JOIN groups g ON g.id = p.group_id";

/// Repository for post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new post in the database.
    ///
    /// Returns the created post with the assigned ID and publication date.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let result = sqlx::query("INSERT INTO posts (text, author_id, group_id) VALUES (?, ?, ?)")
            .bind(&new_post.text)
            .bind(new_post.author_id)
            .bind(new_post.group_id)
            .execute(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| QuillError::NotFound("post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let result = sqlx::query_as::<_, Post>(
            "SELECT id, text, pub_date, author_id, group_id FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a post by ID with author and group details joined in.
    pub async fn get_listing_by_id(&self, id: i64) -> Result<Option<PostListing>> {
        let sql = format!("{LISTING_SELECT} WHERE p.id = ?");
        let result = sqlx::query_as::<_, PostListing>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Update a post's text and/or group.
    ///
    /// The author and publication date are never changed.
    /// Returns the updated post, or None if the post doesn't exist.
    pub async fn update(&self, id: i64, update: &PostUpdate) -> Result<Option<Post>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET ");
        let mut separated = builder.separated(", ");

        if let Some(text) = &update.text {
            separated.push("text = ").push_bind_unseparated(text);
        }
        if let Some(group_id) = update.group_id {
            separated.push("group_id = ").push_bind_unseparated(group_id);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;

        self.get_by_id(id).await
    }

    /// List the most recent posts across all groups and authors.
    pub async fn list_recent(&self, limit: u64, offset: u64) -> Result<Vec<PostListing>> {
        let sql = format!("{LISTING_SELECT} ORDER BY p.pub_date DESC, p.id DESC LIMIT ? OFFSET ?");
        let posts = sqlx::query_as::<_, PostListing>(&sql)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// List the most recent posts in a group.
    pub async fn list_by_group(
        &self,
        group_id: i64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<PostListing>> {
        let sql = format!(
            "{LISTING_SELECT} WHERE p.group_id = ?
             ORDER BY p.pub_date DESC, p.id DESC LIMIT ? OFFSET ?"
        );
        let posts = sqlx::query_as::<_, PostListing>(&sql)
            .bind(group_id)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// List the most recent posts by an author.
    pub async fn list_by_author(
        &self,
        author_id: i64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<PostListing>> {
        let sql = format!(
            "{LISTING_SELECT} WHERE p.author_id = ?
             ORDER BY p.pub_date DESC, p.id DESC LIMIT ? OFFSET ?"
        );
        let posts = sqlx::query_as::<_, PostListing>(&sql)
            .bind(author_id)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// Count all posts.
    pub async fn count_all(&self) -> Result<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;
        Ok(count.0 as u64)
    }

    /// Count posts in a group.
    pub async fn count_by_group(&self, group_id: i64) -> Result<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts WHERE group_id = ?")
            .bind(group_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;
        Ok(count.0 as u64)
    }

    /// Count posts by an author.
    pub async fn count_by_author(&self, author_id: i64) -> Result<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts WHERE author_id = ?")
            .bind(author_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;
        Ok(count.0 as u64)
    }
}
