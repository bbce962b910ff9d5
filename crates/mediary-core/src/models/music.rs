use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::media::Genre;
use super::people::{Group, Person};

/// Credited artists: the API emits either an array of persons or an array
/// of groups, never a mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Artists {
    People(Vec<Person>),
    Groups(Vec<Group>),
}

impl Artists {
    pub fn is_empty(&self) -> bool {
        match self {
            Artists::People(p) => p.is_empty(),
            Artists::Groups(g) => g.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub media_id: Uuid,
    pub name: String,
    pub album_artists: Artists,
    pub release_date: DateTime<Utc>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Total runtime in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub media_id: Uuid,
    pub album_id: Uuid,
    pub track_number: i32,
    pub name: String,
    #[serde(default)]
    pub artists: Option<Artists>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn album_decodes_with_group_artists() {
        let value = json!({
            "media_id": "0193f9c6-4a3c-7e2a-b1f0-1234567890ab",
            "name": "Unknown Pleasures",
            "album_artists": [{
                "id": 3,
                "name": "Joy Division",
                "active": false,
                "added": "2023-10-01T12:00:00Z",
            }],
            "release_date": "1979-06-15T00:00:00Z",
        });
        let album: Album = serde_json::from_value(value).unwrap();
        assert!(matches!(album.album_artists, Artists::Groups(ref g) if g.len() == 1));
        assert!(album.tracks.is_empty());
    }

    #[test]
    fn track_requires_album_linkage() {
        let value = json!({
            "media_id": "0193f9c6-4a3c-7e2a-b1f0-1234567890ab",
            "name": "Disorder",
        });
        assert!(serde_json::from_value::<Track>(value).is_err());
    }
}
