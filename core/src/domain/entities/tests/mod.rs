mod review_tests;
mod user_tests;
