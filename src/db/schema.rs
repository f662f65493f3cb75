//! Database schema and migrations for Quill.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table
    r#"
-- Users table for authentication and authorship
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,           -- Argon2 hash
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_username ON users(username);
"#,
    // v2: Groups table for post communities
    r#"
-- Groups (communities) that posts may optionally belong to
CREATE TABLE groups (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    slug        TEXT NOT NULL UNIQUE,    -- stable external identifier
    description TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_groups_slug ON groups(slug);
"#,
    // v3: Posts table
    r#"
-- Posts: authored text entries, optionally attached to a group
CREATE TABLE posts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    text        TEXT NOT NULL,
    pub_date    TEXT NOT NULL DEFAULT (datetime('now')),
    author_id   INTEGER NOT NULL REFERENCES users(id),
    group_id    INTEGER REFERENCES groups(id) ON DELETE SET NULL
);

CREATE INDEX idx_posts_pub_date ON posts(pub_date);
CREATE INDEX idx_posts_author_id ON posts(author_id);
CREATE INDEX idx_posts_group_id ON posts(group_id);
"#,
];
