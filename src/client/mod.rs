//! The [`GigaChat`] client, its builder, and the session abstraction.

pub mod builder;
pub mod core;
pub mod session;

pub use builder::GigaChatBuilder;
pub use core::GigaChat;
pub use session::ChatSession;
