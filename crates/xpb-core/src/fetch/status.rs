//! Parse the HTTP status line out of collected response header lines.

/// Code and reason phrase of an HTTP status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub code: u32,
    pub reason: String,
}

/// Returns the status line of the final response.
///
/// libcurl hands over the headers of every response in a redirect chain (and
/// of interim `100 Continue` responses), so the last `HTTP/` line wins.
pub(crate) fn last_status_line(lines: &[String]) -> Option<StatusLine> {
    lines.iter().rev().find_map(|line| parse_status_line(line))
}

fn parse_status_line(line: &str) -> Option<StatusLine> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.parse::<u32>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some(StatusLine { code, reason })
}
