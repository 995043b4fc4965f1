
/// Entity mapping tests against an in-memory SQLite database
pub mod entity_tests;
