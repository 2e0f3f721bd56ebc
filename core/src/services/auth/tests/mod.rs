mod fixtures;
mod password_reset_tests;
