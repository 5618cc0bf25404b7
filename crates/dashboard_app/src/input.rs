use std::path::PathBuf;

use dashboard_core::Msg;

use crate::app::Event;

/// Parses one line of user input into an app event. The `file` command
/// takes the rest of the line as the path, so paths with spaces work.
pub fn parse(line: &str) -> Event {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Event::Msg(Msg::NoOp);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    match (command, rest) {
        ("fetch", "") => Event::Msg(Msg::FetchLatestClicked),
        ("file", path) if !path.is_empty() => Event::Msg(Msg::FileSelected(PathBuf::from(path))),
        ("upload", "") => Event::Msg(Msg::UploadSubmitted),
        ("health", "") => Event::Msg(Msg::HealthCheckRequested),
        ("dismiss", "") => Event::Msg(Msg::NoticeDismissed),
        ("quit" | "exit", "") => Event::Quit,
        ("help" | "?", "") => Event::Help,
        _ => Event::Unknown(trimmed.to_string()),
    }
}
