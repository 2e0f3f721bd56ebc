//! Integration tests for the review endpoints and the tour rating aggregate

mod common;

use actix_web::test;
use serde_json::json;

use common::{bearer, context, json_body, signup_request, token_of};
use tb_api::create_app;

#[actix_web::test]
async fn test_review_lifecycle_keeps_tour_stats_current() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tour = ctx.tour("The Forest Hiker").await;

    let first =
        token_of(test::call_service(&app, signup_request("Ann", "ann@example.com").to_request()).await)
            .await;
    let second =
        token_of(test::call_service(&app, signup_request("Bob", "bob@example.com").to_request()).await)
            .await;

    let nested = format!("/api/v1/tours/{}/reviews", tour.id);
    let create = test::TestRequest::post()
        .uri(&nested)
        .insert_header(bearer(&first))
        .set_json(json!({ "review": "Lovely walk", "rating": 4 }))
        .to_request();
    let resp = test::call_service(&app, create).await;
    assert_eq!(resp.status(), 201);
    let body = json_body(resp).await;
    let review_id = body["data"]["review"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["review"]["tour"], tour.id.to_string());

    let stats = ctx.stored_tour(&tour).await.rating_stats();
    assert_eq!((stats.count, stats.average), (1, 4.0));

    let duplicate = test::TestRequest::post()
        .uri(&nested)
        .insert_header(bearer(&first))
        .set_json(json!({ "review": "Again", "rating": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, duplicate).await.status(), 409);

    let other = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&second))
        .set_json(json!({ "review": "Great", "rating": 5, "tour": tour.id }))
        .to_request();
    assert_eq!(test::call_service(&app, other).await.status(), 201);
    let stats = ctx.stored_tour(&tour).await.rating_stats();
    assert_eq!((stats.count, stats.average), (2, 4.5));

    let review_uri = format!("/api/v1/reviews/{}", review_id);
    let foreign_edit = test::TestRequest::patch()
        .uri(&review_uri)
        .insert_header(bearer(&second))
        .set_json(json!({ "rating": 1 }))
        .to_request();
    assert_eq!(test::call_service(&app, foreign_edit).await.status(), 403);

    let own_edit = test::TestRequest::patch()
        .uri(&review_uri)
        .insert_header(bearer(&first))
        .set_json(json!({ "rating": 2 }))
        .to_request();
    let body = json_body(test::call_service(&app, own_edit).await).await;
    assert_eq!(body["data"]["review"]["rating"], 2);
    assert_eq!(body["data"]["review"]["review"], "Lovely walk");
    let stats = ctx.stored_tour(&tour).await.rating_stats();
    assert_eq!((stats.count, stats.average), (2, 3.5));

    let list = test::TestRequest::get()
        .uri(&nested)
        .insert_header(bearer(&second))
        .to_request();
    let body = json_body(test::call_service(&app, list).await).await;
    assert_eq!(body["results"], 2);

    ctx.make_admin("bob@example.com").await;
    let delete = test::TestRequest::delete()
        .uri(&review_uri)
        .insert_header(bearer(&second))
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), 204);
    let stats = ctx.stored_tour(&tour).await.rating_stats();
    assert_eq!((stats.count, stats.average), (1, 5.0));

    let gone = test::TestRequest::get()
        .uri(&review_uri)
        .insert_header(bearer(&first))
        .to_request();
    assert_eq!(test::call_service(&app, gone).await.status(), 404);
}

#[actix_web::test]
async fn test_last_review_removed_restores_default_average() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tour = ctx.tour("The Sea Explorer").await;
    let token =
        token_of(test::call_service(&app, signup_request("Cara", "cara@example.com").to_request()).await)
            .await;

    let create = test::TestRequest::post()
        .uri(&format!("/api/v1/tours/{}/reviews", tour.id))
        .insert_header(bearer(&token))
        .set_json(json!({ "review": "Meh", "rating": 1 }))
        .to_request();
    let body = json_body(test::call_service(&app, create).await).await;
    let review_id = body["data"]["review"]["id"].as_str().unwrap().to_string();

    let delete = test::TestRequest::delete()
        .uri(&format!("/api/v1/reviews/{}", review_id))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), 204);

    let stats = ctx.stored_tour(&tour).await.rating_stats();
    assert_eq!((stats.count, stats.average), (0, 4.5));
}

#[actix_web::test]
async fn test_review_requests_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let tour = ctx.tour("The Snow Adventurer").await;
    let token =
        token_of(test::call_service(&app, signup_request("Dan", "dan@example.com").to_request()).await)
            .await;

    let anonymous = test::TestRequest::get().uri("/api/v1/reviews").to_request();
    assert_eq!(test::call_service(&app, anonymous).await.status(), 401);

    let bad_id = test::TestRequest::get()
        .uri("/api/v1/reviews/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, bad_id).await.status(), 400);

    let no_rating = test::TestRequest::post()
        .uri(&format!("/api/v1/tours/{}/reviews", tour.id))
        .insert_header(bearer(&token))
        .set_json(json!({ "review": "No stars given" }))
        .to_request();
    let resp = test::call_service(&app, no_rating).await;
    assert_eq!(resp.status(), 400);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Please provide a rating");

    let out_of_range = test::TestRequest::post()
        .uri(&format!("/api/v1/tours/{}/reviews", tour.id))
        .insert_header(bearer(&token))
        .set_json(json!({ "review": "Too many stars", "rating": 6 }))
        .to_request();
    assert_eq!(test::call_service(&app, out_of_range).await.status(), 400);

    let unknown_tour = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&token))
        .set_json(json!({ "review": "Where am I", "rating": 3, "tour": uuid::Uuid::new_v4() }))
        .to_request();
    assert_eq!(test::call_service(&app, unknown_tour).await.status(), 404);

    ctx.make_admin("dan@example.com").await;
    let admin_create = test::TestRequest::post()
        .uri(&format!("/api/v1/tours/{}/reviews", tour.id))
        .insert_header(bearer(&token))
        .set_json(json!({ "review": "Admins do not review", "rating": 5 }))
        .to_request();
    assert_eq!(test::call_service(&app, admin_create).await.status(), 403);

    assert_eq!(ctx.stored_tour(&tour).await.ratings_quantity, 0);
}
