//! Post handlers - the five operations of the posts resource.
//!
//! Create and update run the validation gate strictly before any mutating
//! statement reaches the store.

use actix_web::{HttpResponse, web};

use quill_core::StoreError;
use quill_core::domain::{PostPayload, validate};
use quill_core::pagination::{PageBounds, PageInfo};
use quill_core::query::ListFilter;
use quill_shared::dto::ListParams;
use quill_shared::{DataResponse, MessageResponse, PageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let draft = validate(&payload)?;

    state
        .posts
        .insert(&draft)
        .await
        .map_err(|err| AppError::storage("create", err))?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Created post successfully")))
}

/// GET /posts?category=&keyword=&page=&limit=
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let filter = ListFilter::new(params.category, params.keyword);
    let bounds = PageBounds::new(params.page, params.limit);

    let (posts, total) = state
        .posts
        .list(&filter, &bounds)
        .await
        .map_err(|err| AppError::storage("read", err))?;

    let info = PageInfo::from_total(&bounds, total);

    Ok(HttpResponse::Ok().json(PageResponse {
        total_posts: info.total_posts,
        total_pages: info.total_pages,
        current_page: info.current_page,
        limit: info.limit,
        posts,
        next_page: info.next_page,
        previous_page: info.previous_page,
    }))
}

/// GET /posts/{post_id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await
        .map_err(|err| AppError::storage("read", err))?
        .ok_or(AppError::NotFound("Server could not find a requested post"))?;

    Ok(HttpResponse::Ok().json(DataResponse { data: post }))
}

/// PUT /posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let payload = body.into_inner();
    let draft = validate(&payload)?;

    match state.posts.update(post_id, &draft).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new("Updated post successfully"))),
        Err(StoreError::NotFound) => Err(AppError::NotFound(
            "Server could not find a requested post to update",
        )),
        Err(err) => Err(AppError::storage("update", err)),
    }
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    match state.posts.delete(post_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted post successfully"))),
        Err(StoreError::NotFound) => Err(AppError::NotFound(
            "Server could not find a requested post to delete",
        )),
        Err(err) => Err(AppError::storage("delete", err)),
    }
}
