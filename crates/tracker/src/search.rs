use tvmaze::models::SearchResult;
use crate::show_record::ShowMeta;

const STATUS_ENDED: &str = "Ended";

/// Keeps shows that have premiered and are still running. The index in the
/// returned list is the number shown to the user.
pub fn filter_search_results(results: &[SearchResult]) -> Vec<ShowMeta> {
    let mut shows = Vec::new();
    for result in results {
        let show = match result.show.as_ref() {
            Some(show) => show,
            None => continue,
        };

        if show.id == 0 {
            continue;
        }

        let premiered = match show.premiered.as_deref() {
            Some(premiered) => premiered,
            None => continue,
        };

        if show.status.as_deref() == Some(STATUS_ENDED) {
            continue;
        }

        shows.push(ShowMeta {
            id: show.id.to_string(),
            name: show.name.clone(),
            premiere_date: premiered.chars().take(4).collect(),
        });
    }
    shows
}
