use serde;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Show {
    pub id: u32,
    pub name: String,
    pub premiered: Option<String>,
    pub status: Option<String>,
    #[serde(rename="_embedded")]
    pub embedded: Option<Embedded>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct Embedded {
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

// airdate is kept as the raw string, it may be empty or malformed
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Episode {
    pub id: u32,
    pub name: Option<String>,
    pub season: u32,
    pub number: Option<u32>,
    pub airdate: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct SearchResult {
    pub score: Option<f64>,
    pub show: Option<Show>,
}

impl Show {
    pub fn episodes(&self) -> &[Episode] {
        match self.embedded.as_ref() {
            Some(embedded) => embedded.episodes.as_slice(),
            None => &[],
        }
    }

    /// The embed lists episodes oldest-first.
    pub fn get_episodes_newest_first(&self) -> Vec<Episode> {
        self.episodes().iter().rev().cloned().collect()
    }
}
