pub mod log;
pub mod mirror;
pub mod session;

pub use log::{ConversationLog, Message, Role};
pub use mirror::{EmotionMirror, TurnOutcome};
pub use session::SessionState;
