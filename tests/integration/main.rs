//! Integration test harness driving the HTTP router end to end.

mod helpers;

mod password_test;
mod register_test;
mod resolve_test;
