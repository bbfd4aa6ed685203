pub mod error;
pub mod github;
pub mod message;
pub mod router;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use github::events::Event;
pub use message::Message;
pub use router::dispatch::format_event;
