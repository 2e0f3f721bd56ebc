//! Unit tests for mock review repository

use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, ReviewError};
use crate::repositories::review::{MockReviewRepository, ReviewRepository};

#[tokio::test]
async fn test_duplicate_tour_author_rejected() {
    let repo = MockReviewRepository::new();
    let (tour, author) = (Uuid::new_v4(), Uuid::new_v4());

    repo.create(Review::new("first", 4, tour, author)).await.unwrap();
    let result = repo.create(Review::new("second", 2, tour, author)).await;

    assert!(matches!(
        result,
        Err(DomainError::Review(ReviewError::AlreadyReviewed))
    ));
    // The same author may review another tour
    repo.create(Review::new("other tour", 3, Uuid::new_v4(), author))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rating_summary() {
    let repo = MockReviewRepository::new();
    let tour = Uuid::new_v4();

    assert_eq!(repo.rating_summary(tour).await.unwrap(), (0, None));

    for rating in [4, 5, 3] {
        repo.create(Review::new("ok", rating, tour, Uuid::new_v4()))
            .await
            .unwrap();
    }
    repo.create(Review::new("elsewhere", 1, Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(repo.rating_summary(tour).await.unwrap(), (3, Some(4.0)));
}

#[tokio::test]
async fn test_list_filters_by_tour() {
    let repo = MockReviewRepository::new();
    let tour = Uuid::new_v4();
    repo.create(Review::new("a", 5, tour, Uuid::new_v4())).await.unwrap();
    repo.create(Review::new("b", 5, Uuid::new_v4(), Uuid::new_v4())).await.unwrap();

    assert_eq!(repo.list(Some(tour)).await.unwrap().len(), 1);
    assert_eq!(repo.list(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_and_delete() {
    let repo = MockReviewRepository::new();
    let mut review = repo
        .create(Review::new("meh", 2, Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    review.rating = 4;
    let updated = repo.update(review.clone()).await.unwrap();
    assert_eq!(updated.rating, 4);

    assert!(repo.delete(review.id).await.unwrap());
    assert!(!repo.delete(review.id).await.unwrap());
    assert!(matches!(
        repo.update(review).await,
        Err(DomainError::Review(ReviewError::ReviewNotFound))
    ));
}
