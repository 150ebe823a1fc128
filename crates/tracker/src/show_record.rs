use chrono::NaiveDate;
use serde;
use tvmaze::models as provider;
use crate::airdate::{Airdate, NextAirdate};
use crate::episode_trimmer::trim_episodes;

pub type ShowId = String;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: u32,
    #[serde(rename="epname", default)]
    pub name: String,
    #[serde(rename="epseason")]
    pub season: u32,
    #[serde(rename="epnumber")]
    pub number: Option<u32>,
    pub airdate: Airdate,
}

impl Episode {
    pub fn from_provider(episode: &provider::Episode, airdate: NaiveDate) -> Self {
        Self {
            id: episode.id,
            name: episode.name.clone().unwrap_or_default(),
            season: episode.season,
            number: episode.number,
            airdate: Airdate::Known(airdate),
        }
    }
}

/// The show fields that survive a rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMeta {
    pub id: ShowId,
    pub name: String,
    pub premiere_date: String,
}

// The id is the key of the snapshot map, not a field of the stored value
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShowRecord {
    #[serde(skip)]
    pub id: ShowId,
    pub name: String,
    #[serde(rename="premiereDate", default)]
    pub premiere_date: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(rename="nextAirdate", default)]
    pub next_airdate: NextAirdate,
    #[serde(rename="lastFetch")]
    pub last_fetch: NaiveDate,
}

impl ShowRecord {
    pub fn get_meta(&self) -> ShowMeta {
        ShowMeta {
            id: self.id.clone(),
            name: self.name.clone(),
            premiere_date: self.premiere_date.clone(),
        }
    }

    pub fn get_next_episode(&self) -> Option<&Episode> {
        self.episodes.first()
    }
}

/// `episodes[0]` supplies the next airdate only when it hasn't aired before `today`.
pub fn get_next_airdate(episodes: &[Episode], today: NaiveDate) -> NextAirdate {
    match episodes.first().and_then(|episode| episode.airdate.date()) {
        Some(date) if date >= today => NextAirdate::Date(date),
        _ => NextAirdate::NotAvailable,
    }
}

/// Builds a fresh record from newest-first provider episodes. The result replaces any prior record wholesale.
///
/// `next_airdate` is `episodes[0]`'s airdate only when it is today or later, otherwise `"n/a"`.
pub fn build_show_record(meta: &ShowMeta, provider_episodes: &[provider::Episode], today: NaiveDate) -> ShowRecord {
    let episodes = trim_episodes(provider_episodes, today);
    let next_airdate = get_next_airdate(episodes.as_slice(), today);
    ShowRecord {
        id: meta.id.clone(),
        name: meta.name.clone(),
        premiere_date: meta.premiere_date.clone(),
        episodes,
        next_airdate,
        last_fetch: today,
    }
}
