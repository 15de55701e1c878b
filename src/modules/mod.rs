pub mod conversation;
pub mod emotion;
pub mod response;
