use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::classify::{classify_record, MediaKind};

use super::books::Book;
use super::film_tv::{Film, TvShow};
use super::music::{Album, Track};

/// Generic catalog record, as stored in the remote `media` table. Concrete
/// per-kind data lives in the typed models below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "UUID")]
    pub uuid: Uuid,
    pub kind: String,
    pub title: String,
    pub created: DateTime<Utc>,
    pub added: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// One concretely-typed media record.
///
/// The API emits no reliable discriminator, so deserialization routes
/// through `classify_record` and then decodes the matching typed model.
/// Records classifying as `Unknown` are a decode error at this level; use
/// `ClassifiedRecord` when lenient handling is needed.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnyMedia {
    Album(Album),
    Track(Track),
    Book(Book),
    Film(Film),
    TvShow(TvShow),
}

impl AnyMedia {
    pub fn kind(&self) -> MediaKind {
        match self {
            AnyMedia::Album(_) => MediaKind::Album,
            AnyMedia::Track(_) => MediaKind::Track,
            AnyMedia::Book(_) => MediaKind::Book,
            AnyMedia::Film(_) => MediaKind::Film,
            AnyMedia::TvShow(_) => MediaKind::TvShow,
        }
    }

    pub fn media_id(&self) -> Uuid {
        match self {
            AnyMedia::Album(a) => a.media_id,
            AnyMedia::Track(t) => t.media_id,
            AnyMedia::Book(b) => b.media_id,
            AnyMedia::Film(f) => f.media_id,
            AnyMedia::TvShow(s) => s.media_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            AnyMedia::Album(a) => &a.name,
            AnyMedia::Track(t) => &t.name,
            AnyMedia::Book(b) => &b.title,
            AnyMedia::Film(f) => &f.title,
            AnyMedia::TvShow(s) => &s.title,
        }
    }
}

impl<'de> Deserialize<'de> for AnyMedia {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let decoded = match classify_record(&value) {
            MediaKind::Album => serde_json::from_value(value).map(AnyMedia::Album),
            MediaKind::Track => serde_json::from_value(value).map(AnyMedia::Track),
            MediaKind::Book => serde_json::from_value(value).map(AnyMedia::Book),
            MediaKind::Film => serde_json::from_value(value).map(AnyMedia::Film),
            MediaKind::TvShow => serde_json::from_value(value).map(AnyMedia::TvShow),
            MediaKind::Unknown => {
                return Err(D::Error::custom("unrecognized media record shape"))
            }
        };
        decoded.map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<Vec<GenreDescription>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub parent_genre: Option<i32>,
    #[serde(default)]
    pub children: Option<Vec<i32>>,
}

/// Localized genre description; `language` is an IANA language tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreDescription {
    pub genre_id: i32,
    pub language: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i32,
    pub keyword: String,
    pub stars: i16,
    pub vote_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_score: Option<f64>,
}
