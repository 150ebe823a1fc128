use chrono::NaiveDate;
use tracing;
use tvmaze::models as provider;
use crate::airdate::parse_airdate;
use crate::show_record::Episode;

// Input is newest-first. The walk collects episodes airing today or later and
// stops at the first one that aired before `today`, which is dropped along with
// everything older. The result is reversed back to oldest-first.
// Episodes without an airdate are skipped, malformed airdates are skipped and logged.
pub fn trim_episodes(raw_episodes: &[provider::Episode], today: NaiveDate) -> Vec<Episode> {
    let mut episodes = Vec::new();
    for raw in raw_episodes {
        let airdate_str = match raw.airdate.as_deref() {
            Some(airdate) if !airdate.trim().is_empty() => airdate,
            _ => continue,
        };

        let airdate = match parse_airdate(airdate_str) {
            Ok(airdate) => airdate,
            Err(err) => {
                tracing::error!(episode_id = raw.id, airdate = airdate_str, "unparseable episode airdate: {}", err);
                continue;
            },
        };

        if airdate < today {
            break;
        }
        episodes.push(Episode::from_provider(raw, airdate));
    }
    episodes.reverse();
    episodes
}
