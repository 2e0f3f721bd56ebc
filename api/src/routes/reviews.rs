//! Review handlers
//!
//! All routes sit behind [`JwtAuth::required`](crate::middleware::JwtAuth).
//! Role and ownership rules are enforced by the review service.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tb_core::errors::ValidationError;
use tb_core::repositories::{ReviewRepository, TourRepository, UserRepository};
use tb_core::services::mail::Mailer;

use crate::app::AppState;
use crate::dto::reviews::{CreateReviewRequest, ReviewData, ReviewListResponse, UpdateReviewRequest};
use crate::dto::DataResponse;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

/// Handler for GET /api/v1/reviews
pub async fn list_reviews<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let reviews = state.review_service.list_reviews(None).await?;
    Ok(HttpResponse::Ok().json(ReviewListResponse::from(reviews)))
}

/// Handler for GET /api/v1/tours/{tour_id}/reviews
pub async fn list_tour_reviews<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    tour_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let reviews = state
        .review_service
        .list_reviews(Some(tour_id.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(ReviewListResponse::from(reviews)))
}

/// Handler for POST /api/v1/reviews
///
/// The target tour comes from the `tour` field of the body.
///
/// ## Errors
/// - 400 Bad Request: empty text, rating out of range, no tour given
/// - 403 Forbidden: caller is not a `user`
/// - 404 Not Found: unknown tour
/// - 409 Conflict: caller already reviewed this tour
pub async fn create_review<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    CurrentUser(user): CurrentUser,
    body: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let tour_id = body.tour.ok_or_else(|| ValidationError::required("the tour of the review"))?;
    write_review(&state, &user, tour_id, body.into_inner()).await
}

/// Handler for POST /api/v1/tours/{tour_id}/reviews
///
/// A `tour` field in the body takes precedence over the path.
pub async fn create_tour_review<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    CurrentUser(user): CurrentUser,
    tour_id: web::Path<Uuid>,
    body: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let tour_id = body.tour.unwrap_or_else(|| tour_id.into_inner());
    write_review(&state, &user, tour_id, body.into_inner()).await
}

async fn write_review<U, M, R, T>(
    state: &AppState<U, M, R, T>,
    user: &tb_core::domain::entities::user::User,
    tour_id: Uuid,
    body: CreateReviewRequest,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    body.validate()?;
    let rating = body.rating.ok_or_else(|| ValidationError::required("a rating"))?;

    let review = state
        .review_service
        .create_review(user, tour_id, &body.review, rating)
        .await?;

    Ok(HttpResponse::Created().json(DataResponse::new(ReviewData { review })))
}

/// Handler for GET /api/v1/reviews/{id}
pub async fn get_review<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let review = state.review_service.get_review(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(ReviewData { review })))
}

/// Handler for PATCH /api/v1/reviews/{id}
///
/// ## Errors
/// - 403 Forbidden: caller is neither the author nor an admin
/// - 404 Not Found: unknown review
pub async fn update_review<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    CurrentUser(user): CurrentUser,
    id: web::Path<Uuid>,
    body: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    body.validate()?;

    let review = state
        .review_service
        .update_review(&user, id.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(DataResponse::new(ReviewData { review })))
}

/// Handler for DELETE /api/v1/reviews/{id}
pub async fn delete_review<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    CurrentUser(user): CurrentUser,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    state
        .review_service
        .delete_review(&user, id.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
