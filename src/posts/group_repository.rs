//! Group repository for Quill.

use sqlx::SqlitePool;

use super::types::{Group, NewGroup};
use crate::{QuillError, Result};

/// Repository for group CRUD operations.
pub struct GroupRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GroupRepository<'a> {
    /// Create a new GroupRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new group in the database.
    ///
    /// Returns the created group with the assigned ID.
    pub async fn create(&self, new_group: &NewGroup) -> Result<Group> {
        let result =
            sqlx::query("INSERT INTO groups (title, slug, description) VALUES (?, ?, ?)")
                .bind(&new_group.title)
                .bind(&new_group.slug)
                .bind(&new_group.description)
                .execute(self.pool)
                .await
                .map_err(|e| QuillError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| QuillError::NotFound("group".to_string()))
    }

    /// Get a group by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Group>> {
        let result = sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description, created_at FROM groups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a group by its slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Group>> {
        let result = sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description, created_at FROM groups WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all groups ordered by title.
    pub async fn list_all(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description, created_at FROM groups ORDER BY title",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| QuillError::Database(e.to_string()))?;

        Ok(groups)
    }

    /// Check if a group with the given ID exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM groups WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| QuillError::Database(e.to_string()))?;
        Ok(exists.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_group() {
        let db = setup_db().await;
        let repo = GroupRepository::new(db.pool());

        let group = repo
            .create(&NewGroup::new("Cats", "cats", "All about cats"))
            .await
            .unwrap();

        assert_eq!(group.id, 1);
        assert_eq!(group.title, "Cats");
        assert_eq!(group.slug, "cats");
        assert_eq!(group.description, "All about cats");
    }

    #[tokio::test]
    async fn test_create_duplicate_slug() {
        let db = setup_db().await;
        let repo = GroupRepository::new(db.pool());

        repo.create(&NewGroup::new("Cats", "cats", "")).await.unwrap();
        let result = repo.create(&NewGroup::new("More cats", "cats", "")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let db = setup_db().await;
        let repo = GroupRepository::new(db.pool());

        repo.create(&NewGroup::new("Cats", "cats", "")).await.unwrap();

        let found = repo.get_by_slug("cats").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "Cats");

        let not_found = repo.get_by_slug("dogs").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_title() {
        let db = setup_db().await;
        let repo = GroupRepository::new(db.pool());

        repo.create(&NewGroup::new("Zebras", "zebras", "")).await.unwrap();
        repo.create(&NewGroup::new("Cats", "cats", "")).await.unwrap();

        let groups = repo.list_all().await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "Cats");
        assert_eq!(groups[1].title, "Zebras");
    }

    #[tokio::test]
    async fn test_exists() {
        let db = setup_db().await;
        let repo = GroupRepository::new(db.pool());

        assert!(!repo.exists(1).await.unwrap());
        repo.create(&NewGroup::new("Cats", "cats", "")).await.unwrap();
        assert!(repo.exists(1).await.unwrap());
        assert!(!repo.exists(2).await.unwrap());
    }
}
