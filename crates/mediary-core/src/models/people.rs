use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub other_names: Option<Vec<String>>,
    #[serde(default)]
    pub nick_names: Option<Vec<String>>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub death: Option<DateTime<Utc>>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub formed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub disbanded: Option<DateTime<Utc>>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<Person>>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cast {
    #[serde(default)]
    pub actors: Vec<Person>,
    #[serde(default)]
    pub directors: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Studio {
    pub id: i32,
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub artists: Option<Vec<Person>>,
    pub is_film: bool,
    pub is_music: bool,
    pub is_tv: bool,
    pub is_publishing: bool,
    pub is_game: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let person: Person = serde_json::from_value(serde_json::json!({
            "id": 7,
            "first_name": "Ursula",
            "last_name": "Le Guin",
        }))
        .unwrap();
        assert_eq!(person.full_name(), "Ursula Le Guin");
    }
}
