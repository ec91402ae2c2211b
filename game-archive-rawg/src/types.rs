use serde::Deserialize;

use game_archive_lib::ProviderRecord;

/// Response from `GET /games?search=...`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<RawgGame>,
}

/// A game record from the search results. List fields are `None` when the
/// API omits them or sends `null`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawgGame {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub genres: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub tags: Option<Vec<NamedRef>>,
}

/// A genre or tag reference.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

fn names(refs: Option<Vec<NamedRef>>) -> Option<Vec<String>> {
    refs.map(|list| list.into_iter().map(|r| r.name).collect())
}

impl From<RawgGame> for ProviderRecord {
    fn from(game: RawgGame) -> Self {
        ProviderRecord {
            name: game.name,
            release_date: game.released,
            score: game.metacritic,
            genres: names(game.genres),
            tags: names(game.tags),
        }
    }
}

impl SearchResponse {
    /// The first result, which RAWG ranks as the best match.
    pub fn best_match(self) -> Option<RawgGame> {
        self.results.into_iter().next()
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
