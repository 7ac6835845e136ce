mod bot;
mod conversation;
mod engine;
mod rules;
mod types;

pub use bot::Bot;
pub use conversation::ConversationLog;
pub use engine::{Responder, ResponseEngine};
pub use rules::{KeywordRule, DEFAULT_FALLBACK, RULES};
pub use types::{Message, Role};
