pub mod response_mock;
