#![allow(dead_code)]

pub mod chat_mock;

pub use chat_mock::{MockPicker, TestChatData};
