// Search screen: ask for a query, list what the provider found, ask for an ID

use ratatui::backend::Backend;
use tracing::debug;

use super::keys::{Key, KeySource};
use super::prompt::{read_line, ID_MAX_LEN, QUERY_MAX_LEN};
use super::screen::{Row, Screen, BODY_ROW, LIST_ROW};
use super::UiError;
use crate::mode::SearchProfile;
use crate::youtube::extractor::{SearchError, SearchProvider, SearchResult};

const MESSAGE_ROW: u16 = LIST_ROW;

/// Runs one search round. `None` when the search failed, found nothing, or
/// the user left the ID empty. The typed ID is not checked against the list.
pub async fn search_screen<B, K, P>(
    screen: &mut Screen<B>,
    keys: &mut K,
    provider: &P,
    profile: &SearchProfile,
) -> Result<Option<String>, UiError>
where
    B: Backend,
    K: KeySource,
    P: SearchProvider,
{
    let query = read_line(screen, keys, &[], BODY_ROW, profile.query_label, QUERY_MAX_LEN)?;
    let query_row = Row::plain(BODY_ROW, format!("{}{}", profile.query_label, query));

    screen.render(&[query_row.clone(), Row::plain(MESSAGE_ROW, "Searching...")], None)?;

    let results = match provider
        .search(profile.provider_prefix, &query, profile.result_limit)
        .await
    {
        Ok(results) => results,
        Err(e) => {
            debug!(error = %e, %query, "search gave no selection");
            let mut rows = vec![query_row];
            rows.extend(failure_rows(&e));
            acknowledge(screen, keys, &rows)?;
            return Ok(None);
        }
    };

    let mut rows = vec![Row::plain(BODY_ROW, "Search results:")];
    rows.extend(result_rows(&results));
    let prompt_y = LIST_ROW + results.len() as u16 + 1;

    let id = read_line(screen, keys, &rows, prompt_y, profile.id_label, ID_MAX_LEN)?;
    if id.is_empty() {
        debug!("empty ID, nothing to play");
        return Ok(None);
    }
    Ok(Some(id))
}

/// `1. Title (ID: id)`, one row per result from the list row down.
pub fn result_rows(results: &[SearchResult]) -> Vec<Row> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            Row::plain(
                LIST_ROW + i as u16,
                format!("{}. {} (ID: {})", i + 1, result.title, result.id),
            )
        })
        .collect()
}

fn failure_rows(error: &SearchError) -> Vec<Row> {
    match error {
        SearchError::TimedOut(_) => vec![Row::plain(MESSAGE_ROW, "The search took too long!")],
        SearchError::ProviderFailed(details) => {
            let mut rows = vec![Row::plain(MESSAGE_ROW, "Search failed:")];
            rows.extend(
                details
                    .lines()
                    .enumerate()
                    .map(|(i, line)| Row::plain(MESSAGE_ROW + 1 + i as u16, line)),
            );
            rows
        }
        SearchError::NoResults => vec![Row::plain(MESSAGE_ROW, "No search results found.")],
    }
}

/// Shows `rows` and waits for any key.
fn acknowledge<B, K>(screen: &mut Screen<B>, keys: &mut K, rows: &[Row]) -> Result<(), UiError>
where
    B: Backend,
    K: KeySource,
{
    screen.render(rows, None)?;
    match keys.next_key()? {
        Key::Interrupt => Err(UiError::Interrupted),
        _ => Ok(()),
    }
}
