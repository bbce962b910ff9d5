use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::people::{Cast, Person};

/// Film and TV records carry no structural discriminator; the `kind` tag is
/// the only signal, so both models keep it as a plain field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    #[serde(rename = "UUID")]
    pub media_id: Uuid,
    pub kind: String,
    pub title: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub creator: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Cast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShow {
    #[serde(rename = "UUID")]
    pub media_id: Uuid,
    pub kind: String,
    pub title: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub creator: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Cast>,
}
