use hubchat::github::events::{Actor, Event, Payload, Repo};
use hubchat::message::templates;
use hubchat::Error;

fn ref_event(event_type: &str, ref_type: &str, git_ref: &str) -> Event {
    Event {
        event_type: event_type.into(),
        repo: Repo { name: "a/b".into() },
        actor: Actor { login: "bob".into() },
        payload: Payload {
            git_ref: Some(git_ref.into()),
            ref_type: Some(ref_type.into()),
            ..Default::default()
        },
    }
}

#[test]
fn test_branch_created() {
    let event = ref_event("CreateEvent", "branch", "feature-x");

    let message = templates::branch_created(&event).unwrap();

    assert_eq!(
        message.text,
        "[a/b] The branch **feature-x** was created by bob\nhttps://github.com/a/b/tree/feature-x"
    );
    assert!(message.urls.is_empty());
}

#[test]
fn test_tag_created() {
    let event = ref_event("CreateEvent", "tag", "v1.0");

    let message = templates::tag_created(&event).unwrap();

    assert_eq!(message.text, "[a/b] The tag **v1.0** was created by bob");
    assert!(message.urls.is_empty());
}

#[test]
fn test_branch_deleted() {
    let event = ref_event("DeleteEvent", "branch", "feature-x");

    let message = templates::branch_deleted(&event).unwrap();

    assert_eq!(
        message.text,
        "[a/b] The branch **feature-x** was deleted by bob"
    );
    assert!(message.urls.is_empty());
}

#[test]
fn test_tag_deleted() {
    let event = ref_event("DeleteEvent", "tag", "v1.0");

    let message = templates::tag_deleted(&event).unwrap();

    assert_eq!(message.text, "[a/b] The tag **v1.0** was deleted by bob");
    assert!(message.urls.is_empty());
}

#[test]
fn test_missing_ref() {
    let mut event = ref_event("CreateEvent", "tag", "v1.0");
    event.payload.git_ref = None;

    let err = templates::tag_created(&event).unwrap_err();
    assert!(matches!(err, Error::MissingField("payload.ref")));
}
