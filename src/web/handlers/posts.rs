//! Post listing and form handlers.
//!
//! Listing pages return their full render context as JSON. Form
//! submissions either redirect on success or re-render the form with
//! field errors at 200, so a client can show them in place.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;

use crate::db::UserRepository;
use crate::posts::{
    FormOutcome, GroupRepository, Page, PostForm, PostFormErrors, PostListing, PostRepository,
};
use crate::web::dto::{
    ApiResponse, AuthorView, GroupPage, GroupView, IndexPage, PageQuery, PageView, PostDetailPage,
    PostFormPage, PostView, ProfilePage,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::RequireUser;

/// Title shown on the home page.
const INDEX_TITLE: &str = "Latest updates";

/// Fetch one resolved page of posts from a counted listing.
async fn paginate<F, Fut>(
    state: &AppState,
    requested: Option<u64>,
    total: u64,
    fetch: F,
) -> Result<Page<PostListing>, ApiError>
where
    F: FnOnce(u64, u64) -> Fut,
    Fut: std::future::Future<Output = crate::Result<Vec<PostListing>>>,
{
    let paginator = &state.paginator;
    let number = paginator.resolve(requested, total);
    let items = fetch(paginator.page_size(), paginator.offset(number)).await?;

    Ok(Page {
        items,
        number,
        total_pages: paginator.page_count(total),
        total_items: total,
    })
}

/// GET / - The most recent posts across all groups.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<IndexPage>>, ApiError> {
    let repo = PostRepository::new(state.db.pool());

    let total = repo.count_all().await?;
    let page = paginate(&state, query.number(), total, |limit, offset| {
        repo.list_recent(limit, offset)
    })
    .await?;

    Ok(Json(ApiResponse::new(IndexPage {
        title: INDEX_TITLE.to_string(),
        page: PageView::from_listings(page),
    })))
}

/// GET /group/:slug/ - Posts in a group.
pub async fn group_posts(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<GroupPage>>, ApiError> {
    let group_repo = GroupRepository::new(state.db.pool());
    let post_repo = PostRepository::new(state.db.pool());

    let group = group_repo
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Group not found"))?;

    let total = post_repo.count_by_group(group.id).await?;
    let page = paginate(&state, query.number(), total, |limit, offset| {
        post_repo.list_by_group(group.id, limit, offset)
    })
    .await?;

    Ok(Json(ApiResponse::new(GroupPage {
        group: GroupView::from(group),
        page: PageView::from_listings(page),
    })))
}

/// GET /profile/:username/ - Posts by an author.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<ProfilePage>>, ApiError> {
    let user_repo = UserRepository::new(state.db.pool());
    let post_repo = PostRepository::new(state.db.pool());

    let author = user_repo
        .get_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let total = post_repo.count_by_author(author.id).await?;
    let page = paginate(&state, query.number(), total, |limit, offset| {
        post_repo.list_by_author(author.id, limit, offset)
    })
    .await?;

    Ok(Json(ApiResponse::new(ProfilePage {
        author: AuthorView {
            id: author.id,
            username: author.username,
        },
        post_count: total,
        page: PageView::from_listings(page),
    })))
}

/// GET /posts/:id/ - A single post with its author's post count.
pub async fn post_detail(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<PostDetailPage>>, ApiError> {
    let repo = PostRepository::new(state.db.pool());

    let listing = repo
        .get_listing_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    let author_post_count = repo.count_by_author(listing.author_id).await?;

    Ok(Json(ApiResponse::new(PostDetailPage {
        post: PostView::from(listing),
        author_post_count,
    })))
}

/// Build the form page context for rendering.
async fn form_page(
    state: &AppState,
    text: String,
    group: Option<i64>,
    errors: PostFormErrors,
    is_edit: bool,
) -> Result<PostFormPage, ApiError> {
    let groups = GroupRepository::new(state.db.pool())
        .list_all()
        .await?
        .into_iter()
        .map(GroupView::from)
        .collect();

    Ok(PostFormPage {
        text,
        group,
        errors,
        groups,
        is_edit,
    })
}

/// GET /create/ - Blank post form. Requires login.
pub async fn create_form(
    State(state): State<Arc<AppState>>,
    RequireUser(_claims): RequireUser,
) -> Result<Json<ApiResponse<PostFormPage>>, ApiError> {
    let page = form_page(&state, String::new(), None, PostFormErrors::default(), false).await?;
    Ok(Json(ApiResponse::new(page)))
}

/// POST /create/ - Create a post. Requires login.
///
/// Redirects to the author's profile on success. Invalid input
/// re-renders the form with field errors instead of failing.
pub async fn post_create(
    State(state): State<Arc<AppState>>,
    RequireUser(claims): RequireUser,
    Json(form): Json<PostForm>,
) -> Result<Response, ApiError> {
    let group_repo = GroupRepository::new(state.db.pool());

    match form.validate(&group_repo).await? {
        FormOutcome::Valid(valid) => {
            let post = PostRepository::new(state.db.pool())
                .create(&valid.into_new_post(claims.sub))
                .await?;
            tracing::info!("User {} created post {}", claims.username, post.id);
            Ok(Redirect::to(&format!("/profile/{}/", claims.username)).into_response())
        }
        FormOutcome::Invalid(errors) => {
            let page = form_page(&state, form.text, form.group, errors, false).await?;
            Ok(Json(ApiResponse::new(page)).into_response())
        }
    }
}

/// GET /posts/:id/edit/ - Edit form with current values. Requires login.
///
/// Only the author may edit; anyone else is sent to the post page.
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    RequireUser(claims): RequireUser,
    Path(post_id): Path<i64>,
) -> Result<Response, ApiError> {
    let repo = PostRepository::new(state.db.pool());

    let post = repo
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    if post.author_id != claims.sub {
        return Ok(Redirect::to(&format!("/posts/{}/", post_id)).into_response());
    }

    let page = form_page(&state, post.text, post.group_id, PostFormErrors::default(), true).await?;
    Ok(Json(ApiResponse::new(page)).into_response())
}

/// POST /posts/:id/edit/ - Update a post. Requires login.
///
/// Only the author may edit; anyone else is sent to the post page.
/// Redirects to the post page on success.
pub async fn post_edit(
    State(state): State<Arc<AppState>>,
    RequireUser(claims): RequireUser,
    Path(post_id): Path<i64>,
    Json(form): Json<PostForm>,
) -> Result<Response, ApiError> {
    let repo = PostRepository::new(state.db.pool());
    let group_repo = GroupRepository::new(state.db.pool());

    let post = repo
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    if post.author_id != claims.sub {
        return Ok(Redirect::to(&format!("/posts/{}/", post_id)).into_response());
    }

    match form.validate(&group_repo).await? {
        FormOutcome::Valid(valid) => {
            repo.update(post_id, &valid.into_update()).await?;
            tracing::info!("User {} edited post {}", claims.username, post_id);
            Ok(Redirect::to(&format!("/posts/{}/", post_id)).into_response())
        }
        FormOutcome::Invalid(errors) => {
            let page = form_page(&state, form.text, form.group, errors, true).await?;
            Ok(Json(ApiResponse::new(page)).into_response())
        }
    }
}
