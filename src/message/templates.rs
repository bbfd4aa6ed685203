//! One formatting function per recognized event. Each is a pure mapping from
//! payload to [`Message`]; required fields that are absent surface as
//! [`Error::MissingField`], never as fallback text.

use crate::error::{Error, Result};
use crate::github::events::Event;
use crate::message::Message;

fn commit_url(repo: &str, sha: &str) -> String {
    format!("https://github.com/{repo}/commit/{sha}")
}

/// Push refs look like `refs/heads/<branch>`; the branch is the third segment.
fn branch_from_ref(git_ref: &str) -> Result<&str> {
    git_ref
        .split('/')
        .nth(2)
        .ok_or(Error::MissingField("payload.ref"))
}

pub fn push_single(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let branch = branch_from_ref(event.payload.git_ref()?)?;
    let commit = event
        .payload
        .commits()?
        .first()
        .ok_or(Error::MissingField("payload.commits[0]"))?;
    let author = &commit.author.name;

    let mut text = format!("[{repo}:{branch}] 1 new commit by {author}:");
    text.push_str(&format!("\n#{{0}}: {} - {author}", commit.message));

    Ok(Message {
        text,
        urls: vec![commit_url(repo, &commit.sha)],
    })
}

pub fn push_multiple(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let branch = branch_from_ref(event.payload.git_ref()?)?;
    let size = event.payload.size()?;
    let commits = event.payload.commits()?;

    let mut text = format!("[{repo}:{branch}] {size} new commits.");
    let mut urls = Vec::with_capacity(commits.len());

    for (i, commit) in commits.iter().enumerate() {
        text.push_str(&format!(
            "\n#{{{i}}}: {} - {}",
            commit.message, commit.author.name
        ));
        urls.push(commit_url(repo, &commit.sha));
    }

    Ok(Message { text, urls })
}

pub fn branch_created(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let branch = event.payload.git_ref()?;
    let user = &event.actor.login;

    let mut text = format!("[{repo}] The branch **{branch}** was created by {user}");
    text.push_str(&format!("\nhttps://github.com/{repo}/tree/{branch}"));

    Ok(Message::text_only(text))
}

pub fn tag_created(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let tag = event.payload.git_ref()?;
    let user = &event.actor.login;

    Ok(Message::text_only(format!(
        "[{repo}] The tag **{tag}** was created by {user}"
    )))
}

pub fn branch_deleted(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let branch = event.payload.git_ref()?;
    let user = &event.actor.login;

    Ok(Message::text_only(format!(
        "[{repo}] The branch **{branch}** was deleted by {user}"
    )))
}

pub fn tag_deleted(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let tag = event.payload.git_ref()?;
    let user = &event.actor.login;

    Ok(Message::text_only(format!(
        "[{repo}] The tag **{tag}** was deleted by {user}"
    )))
}

pub fn pull_request_opened(event: &Event) -> Result<Message> {
    let repo = &event.repo.name;
    let number = event.payload.number()?;
    let pr = event.payload.pull_request()?;

    let mut text = format!("[**{repo}**] New pull request from {}", pr.user.login);
    text.push_str(&format!(
        "\n[{repo}:{} ← {}:{}]",
        pr.base.git_ref, pr.head.repo.full_name, pr.head.git_ref
    ));
    text.push_str(&format!(
        "\n{} commits • {} changed files • {} additions • {} deletions",
        pr.commits, pr.changed_files, pr.additions, pr.deletions
    ));
    text.push_str("\n#{0}");

    Ok(Message {
        text,
        urls: vec![format!("https://github.com/{repo}/pull/{number}")],
    })
}
