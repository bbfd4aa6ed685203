use tracing::debug;

use crate::error::{Error, Result};
use crate::github::events::Event;
use crate::message::{templates, Message};

pub type Formatter = fn(&Event) -> Result<Message>;

/// Closed mapping from (event type, action) to formatter. Unknown keys are an
/// error for the caller rather than a silent fall-through.
pub fn resolve(event_type: &str, action: Option<&str>) -> Result<Formatter> {
    match (event_type, action) {
        ("PushEvent", _) => Ok(push),
        ("CreateEvent", Some("branch")) => Ok(templates::branch_created),
        ("CreateEvent", Some("tag")) => Ok(templates::tag_created),
        ("DeleteEvent", Some("branch")) => Ok(templates::branch_deleted),
        ("DeleteEvent", Some("tag")) => Ok(templates::tag_deleted),
        ("PullRequestEvent", Some("opened")) => Ok(templates::pull_request_opened),
        _ => Err(Error::UnsupportedEvent {
            event_type: event_type.to_string(),
            action: action.map(str::to_string),
        }),
    }
}

fn push(event: &Event) -> Result<Message> {
    if event.payload.commits()?.len() == 1 {
        templates::push_single(event)
    } else {
        templates::push_multiple(event)
    }
}

pub fn format_event(event: &Event) -> Result<Message> {
    let (event_type, action) = event.event_key();
    debug!(event_type, ?action, "resolving formatter");
    let formatter = resolve(event_type, action)?;
    formatter(event)
}
