//! Unit tests for review, tour and rating value types

use uuid::Uuid;

use crate::domain::entities::{Review, ReviewPatch, Tour};
use crate::domain::value_objects::RatingStats;

#[test]
fn test_review_apply_patch() {
    let author = Uuid::new_v4();
    let mut review = Review::new("  Great tour  ", 4, Uuid::new_v4(), author);
    assert_eq!(review.review, "Great tour");
    assert!(review.is_authored_by(author));

    review.apply(&ReviewPatch {
        review: None,
        rating: Some(2),
    });
    assert_eq!(review.rating, 2);
    assert_eq!(review.review, "Great tour");
}

#[test]
fn test_review_serialized_with_refs() {
    let review = Review::new("Nice", 5, Uuid::new_v4(), Uuid::new_v4());
    let json = serde_json::to_value(&review).unwrap();

    assert_eq!(json["tour"], review.tour_id.to_string());
    assert_eq!(json["user"], review.user_id.to_string());
    assert!(json.get("createdAt").is_some());
}

#[test]
fn test_tour_defaults() {
    let tour = Tour::new("The Forest Hiker", 39700, 4.5);
    assert_eq!(tour.slug, "the-forest-hiker");
    assert_eq!(tour.rating_stats(), RatingStats { count: 0, average: 4.5 });
}

#[test]
fn test_rating_stats_from_summary() {
    assert_eq!(
        RatingStats::from_summary(3, Some(4.0), 4.5),
        RatingStats { count: 3, average: 4.0 }
    );
    assert_eq!(
        RatingStats::from_summary(0, None, 4.5),
        RatingStats { count: 0, average: 4.5 }
    );
    assert_eq!(
        RatingStats::from_summary(0, Some(3.0), 4.5),
        RatingStats { count: 0, average: 4.5 }
    );
}
