#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("unsupported event: {event_type} (action: {action:?})")]
    UnsupportedEvent {
        event_type: String,
        action: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
