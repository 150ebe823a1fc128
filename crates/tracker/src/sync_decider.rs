use chrono::NaiveDate;
use std::fmt;
use crate::airdate::Airdate;
use crate::show_record::ShowRecord;

/// A record fetched exactly this many days ago is still fresh.
pub const STALE_AFTER_DAYS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReason {
    Stale,
    NoEpisodes,
    UnknownAirdate,
    EpisodeAired,
}

impl fmt::Display for SyncReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SyncReason::Stale => "last fetch is stale",
            SyncReason::NoEpisodes => "no upcoming episodes cached",
            SyncReason::UnknownAirdate => "next episode has an unknown airdate",
            SyncReason::EpisodeAired => "next episode has already aired",
        };
        f.write_str(message)
    }
}

pub fn get_sync_reason(record: &ShowRecord, today: NaiveDate) -> Option<SyncReason> {
    if (today - record.last_fetch).num_days() > STALE_AFTER_DAYS {
        return Some(SyncReason::Stale);
    }

    let episode = match record.episodes.first() {
        Some(episode) => episode,
        None => return Some(SyncReason::NoEpisodes),
    };

    match episode.airdate {
        Airdate::Unknown => Some(SyncReason::UnknownAirdate),
        Airdate::Known(airdate) if airdate < today => Some(SyncReason::EpisodeAired),
        Airdate::Known(_) => None,
    }
}

pub fn needs_sync(record: &ShowRecord, today: NaiveDate) -> bool {
    get_sync_reason(record, today).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::airdate::NextAirdate;
    use crate::show_record::Episode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn record(last_fetch: NaiveDate, airdates: &[Airdate]) -> ShowRecord {
        let episodes = airdates
            .iter()
            .enumerate()
            .map(|(index, airdate)| Episode {
                id: index as u32,
                name: format!("Episode {}", index),
                season: 1,
                number: Some(index as u32),
                airdate: *airdate,
            })
            .collect();
        ShowRecord {
            id: "82".to_string(),
            name: "Game of Thrones".to_string(),
            premiere_date: "2011".to_string(),
            episodes,
            next_airdate: NextAirdate::NotAvailable,
            last_fetch,
        }
    }

    #[test]
    fn fetched_exactly_five_days_ago_with_future_episode_is_fresh() {
        let record = record(today() - Duration::days(5), &[Airdate::Known(today() + Duration::days(1))]);
        assert!(!needs_sync(&record, today()));
    }

    #[test]
    fn fetched_six_days_ago_is_stale_regardless_of_episodes() {
        let record = record(today() - Duration::days(6), &[Airdate::Known(today() + Duration::days(30))]);
        assert_eq!(get_sync_reason(&record, today()), Some(SyncReason::Stale));
    }

    #[test]
    fn empty_episode_list_needs_sync() {
        let record = record(today(), &[]);
        assert_eq!(get_sync_reason(&record, today()), Some(SyncReason::NoEpisodes));
    }

    #[test]
    fn unknown_first_airdate_needs_sync() {
        let record = record(today(), &[Airdate::Unknown, Airdate::Known(today())]);
        assert_eq!(get_sync_reason(&record, today()), Some(SyncReason::UnknownAirdate));
    }

    #[test]
    fn aired_first_episode_needs_sync() {
        let record = record(today() - Duration::days(2), &[Airdate::Known(today() - Duration::days(1))]);
        assert_eq!(get_sync_reason(&record, today()), Some(SyncReason::EpisodeAired));
    }

    #[test]
    fn episode_airing_today_is_fresh() {
        let record = record(today() - Duration::days(5), &[Airdate::Known(today())]);
        assert!(!needs_sync(&record, today()));
    }

    #[test]
    fn only_first_episode_is_checked() {
        let record = record(today(), &[Airdate::Known(today() + Duration::days(1)), Airdate::Unknown]);
        assert!(!needs_sync(&record, today()));
    }
}
