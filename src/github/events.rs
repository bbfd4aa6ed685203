use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One entry from the GitHub `/events` feed. The `payload` block differs per
/// event type, so its fields are all optional; formatters pull what they need
/// through the accessors below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: Repo,
    pub actor: Actor,
    pub payload: Payload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    /// "owner/name"
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payload {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<Commit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub user: Actor,
    pub head: PullRequestHead,
    pub base: PullRequestBase,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestHead {
    pub repo: HeadRepo,
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadRepo {
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestBase {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl Event {
    pub fn from_json(payload: &[u8]) -> Result<Self> {
        serde_json::from_slice(payload).map_err(|e| Error::InvalidPayload(e.to_string()))
    }

    /// Event type plus the action that discriminates formatters within it:
    /// `ref_type` for create/delete events, `action` for pull requests.
    pub fn event_key(&self) -> (&str, Option<&str>) {
        let action = match self.event_type.as_str() {
            "CreateEvent" | "DeleteEvent" => self.payload.ref_type.as_deref(),
            "PullRequestEvent" => self.payload.action.as_deref(),
            _ => None,
        };
        (&self.event_type, action)
    }
}

impl Payload {
    pub fn git_ref(&self) -> Result<&str> {
        self.git_ref
            .as_deref()
            .ok_or(Error::MissingField("payload.ref"))
    }

    pub fn commits(&self) -> Result<&[Commit]> {
        self.commits
            .as_deref()
            .ok_or(Error::MissingField("payload.commits"))
    }

    pub fn size(&self) -> Result<u64> {
        self.size.ok_or(Error::MissingField("payload.size"))
    }

    pub fn number(&self) -> Result<u64> {
        self.number.ok_or(Error::MissingField("payload.number"))
    }

    pub fn pull_request(&self) -> Result<&PullRequest> {
        self.pull_request
            .as_ref()
            .ok_or(Error::MissingField("payload.pull_request"))
    }
}
