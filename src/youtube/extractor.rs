// YouTube search through yt-dlp
// One subprocess per search, flattened JSON listing, hard deadline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);
pub const PLACEHOLDER_TITLE: &str = "No title";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search took longer than {}s", .0.as_secs())]
    TimedOut(Duration),

    #[error("{0}")]
    ProviderFailed(String),

    #[error("no search results")]
    NoResults,
}

/// Anything that can turn a query into ranked results.
#[allow(async_fn_in_trait)]
pub trait SearchProvider {
    /// `prefix` picks the provider's search kind (`ytsearch`), `limit` caps
    /// the number of results. An empty result list is `NoResults`.
    async fn search(
        &self,
        prefix: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// The `<prefix><limit>:<query>` term yt-dlp understands as a search.
pub fn search_term(prefix: &str, limit: usize, query: &str) -> String {
    format!("{}{}:{}", prefix, limit, query)
}

pub struct YtDlp {
    program: PathBuf,
    timeout: Duration,
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        YtDlp {
            program: program.into(),
            timeout: SEARCH_TIMEOUT,
        }
    }

    pub fn command(&self, term: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--flat-playlist")
            .arg("-J")
            .arg(term)
            .stdin(Stdio::null());
        command
    }
}

impl SearchProvider for YtDlp {
    async fn search(
        &self,
        prefix: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let term = search_term(prefix, limit, query);
        debug!(program = %self.program.display(), %term, "running search");

        let output = capture(self.command(&term), self.timeout).await?;
        if !output.status.success() {
            return Err(SearchError::ProviderFailed(failure_details(
                &self.program.display().to_string(),
                &output,
            )));
        }

        let results = parse_listing(&output.stdout)?;
        debug!(count = results.len(), "search finished");
        if results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(results)
    }
}

/// Runs `command` to completion, capturing stdout and stderr. The child is
/// killed if it outlives `deadline`.
pub async fn capture(mut command: Command, deadline: Duration) -> Result<Output, SearchError> {
    let program = command.as_std().get_program().to_string_lossy().into_owned();
    command.kill_on_drop(true);

    match tokio::time::timeout(deadline, command.output()).await {
        Err(_) => Err(SearchError::TimedOut(deadline)),
        Ok(Err(e)) => Err(SearchError::ProviderFailed(format!(
            "Failed to run {}: {}",
            program, e
        ))),
        Ok(Ok(output)) => Ok(output),
    }
}

fn failure_details(program: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let message = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };

    if message.is_empty() {
        format!("{} failed ({})", program, output.status)
    } else {
        format!("{} failed ({}): {}", program, output.status, message)
    }
}

/// Reads a `-J` document. Entries without a usable `id` are dropped, a
/// missing `title` becomes the placeholder, provider order is kept.
pub fn parse_listing(stdout: &[u8]) -> Result<Vec<SearchResult>, SearchError> {
    let json: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|e| SearchError::ProviderFailed(format!("JSON parse error: {}", e)))?;

    if !json.is_object() {
        return Err(SearchError::ProviderFailed(
            "JSON parse error: expected an object at the top level".to_string(),
        ));
    }

    let entries = json["entries"].as_array().map(Vec::as_slice).unwrap_or(&[]);
    let results = entries
        .iter()
        .filter_map(|entry| {
            let id = entry["id"].as_str().filter(|id| !id.is_empty())?;
            Some(SearchResult {
                id: id.to_string(),
                title: entry["title"].as_str().unwrap_or(PLACEHOLDER_TITLE).to_string(),
            })
        })
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn term_joins_prefix_limit_and_query() {
        assert_eq!(search_term("ytsearch", 5, "test song"), "ytsearch5:test song");
        assert_eq!(search_term("ytsearch", 10, ""), "ytsearch10:");
    }

    #[test]
    fn command_asks_for_a_flat_json_listing() {
        let command = YtDlp::new("yt-dlp").command("ytsearch5:test song");
        let inner = command.as_std();
        assert_eq!(inner.get_program(), "yt-dlp");
        let args: Vec<_> = inner.get_args().collect();
        assert_eq!(args, ["--flat-playlist", "-J", "ytsearch5:test song"]);
    }

    #[test]
    fn parses_entries_in_order() {
        let json = br#"{"entries": [
            {"id": "abc123", "title": "Song A"},
            {"id": "def456", "title": "Song B"},
            {"id": "ghi789", "title": "Song C"}
        ]}"#;
        let results = parse_listing(json).unwrap();
        assert_eq!(ids(&results), ["abc123", "def456", "ghi789"]);
        assert_eq!(results[1].title, "Song B");
    }

    #[test]
    fn single_entry() {
        let results = parse_listing(br#"{"entries": [{"id": "abc123", "title": "Only"}]}"#).unwrap();
        assert_eq!(
            results,
            [SearchResult {
                id: "abc123".to_string(),
                title: "Only".to_string()
            }]
        );
    }

    #[test]
    fn entries_without_id_are_dropped() {
        let json = br#"{"entries": [
            {"title": "no id"},
            {"id": "", "title": "empty id"},
            {"id": null, "title": "null id"},
            {"id": 42, "title": "numeric id"},
            {"id": "keep", "title": "kept"}
        ]}"#;
        let results = parse_listing(json).unwrap();
        assert_eq!(ids(&results), ["keep"]);
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let json = br#"{"entries": [{"id": "a"}, {"id": "b", "title": null}]}"#;
        let results = parse_listing(json).unwrap();
        assert!(results.iter().all(|r| r.title == PLACEHOLDER_TITLE));
    }

    #[test]
    fn empty_or_missing_entries_parse_to_nothing() {
        assert!(parse_listing(br#"{"entries": []}"#).unwrap().is_empty());
        assert!(parse_listing(br#"{"title": "ytsearch5:x"}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_output_is_a_provider_failure() {
        let err = parse_listing(b"ERROR: something went wrong").unwrap_err();
        assert!(matches!(err, SearchError::ProviderFailed(ref msg) if msg.contains("JSON")));

        let err = parse_listing(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SearchError::ProviderFailed(_)));
    }

    #[cfg(unix)]
    mod subprocess {
        use super::super::*;

        fn sh(script: &str) -> Command {
            let mut command = Command::new("sh");
            command.arg("-c").arg(script);
            command
        }

        #[tokio::test]
        async fn slow_provider_times_out() {
            let err = capture(sh("sleep 5"), Duration::from_millis(100)).await.unwrap_err();
            assert!(matches!(err, SearchError::TimedOut(d) if d == Duration::from_millis(100)));
        }

        #[tokio::test]
        async fn missing_program_is_a_provider_failure() {
            let command = Command::new("definitely-not-a-real-search-tool");
            let err = capture(command, SEARCH_TIMEOUT).await.unwrap_err();
            assert!(matches!(err, SearchError::ProviderFailed(ref msg) if msg.contains("Failed to run")));
        }

        #[tokio::test]
        async fn non_zero_exit_reports_stderr() {
            let provider = YtDlp::new("sh");
            // sh rejects the yt-dlp flags and exits non-zero
            let err = provider.search("ytsearch", "x", 5).await.unwrap_err();
            assert!(matches!(err, SearchError::ProviderFailed(ref msg) if msg.starts_with("sh failed")));
        }

        #[tokio::test]
        async fn non_json_stdout_is_a_provider_failure() {
            // echo succeeds and prints its arguments, which is not JSON
            let provider = YtDlp::new("echo");
            let err = provider.search("ytsearch", "x", 5).await.unwrap_err();
            assert!(matches!(err, SearchError::ProviderFailed(ref msg) if msg.contains("JSON")));
        }

        #[tokio::test]
        async fn captured_output_keeps_both_streams() {
            let output = capture(sh("echo out; echo err >&2"), SEARCH_TIMEOUT).await.unwrap();
            assert!(output.status.success());
            assert_eq!(output.stdout, b"out\n");
            assert_eq!(output.stderr, b"err\n");
        }
    }
}
