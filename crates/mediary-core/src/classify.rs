//! Media-kind classification for heterogeneous catalog records.
//!
//! The catalog's media endpoints return one JSON array whose items may be
//! albums, tracks, books, films, or TV shows. The `kind` tag is not always
//! present or trustworthy, so classification inspects the record's shape
//! against a fixed precedence table. Structural discriminators win over the
//! `kind` tag; a record matching nothing degrades to `Unknown` instead of
//! failing, since partial API responses must not take down the caller.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of media kinds the catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Album,
    Track,
    Book,
    Film,
    #[serde(rename = "tvshow")]
    TvShow,
    Unknown,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MediaKind::Album => write!(f, "album"),
            MediaKind::Track => write!(f, "track"),
            MediaKind::Book => write!(f, "book"),
            MediaKind::Film => write!(f, "film"),
            MediaKind::TvShow => write!(f, "tvshow"),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "album" => Ok(MediaKind::Album),
            "track" => Ok(MediaKind::Track),
            "book" => Ok(MediaKind::Book),
            "film" => Ok(MediaKind::Film),
            "tvshow" => Ok(MediaKind::TvShow),
            "unknown" => Ok(MediaKind::Unknown),
            _ => Err(anyhow::anyhow!("Invalid media kind: {}", s)),
        }
    }
}

/// Classify a single decoded record by shape.
///
/// Discriminators are evaluated in fixed precedence order; the first match
/// wins. Field presence is all that matters, never field order or value
/// types (beyond the `kind` string). Non-object inputs are `Unknown`.
pub fn classify_record(record: &Value) -> MediaKind {
    let obj = match record.as_object() {
        Some(obj) => obj,
        None => return MediaKind::Unknown,
    };

    // Structural discriminators take precedence over the `kind` tag, which
    // upstream responses have been known to omit or misreport.
    if obj.contains_key("album_artists") && obj.contains_key("media_id") {
        return MediaKind::Album;
    }
    if obj.contains_key("media_id")
        && obj.contains_key("track_number")
        && obj.contains_key("album_id")
    {
        return MediaKind::Track;
    }
    if obj.contains_key("publication_date")
        && obj.contains_key("authors")
        && obj.contains_key("pages")
    {
        return MediaKind::Book;
    }

    // Film and TV shows have no structural discriminator of their own; the
    // tag is the only signal. A record missing it falls through to Unknown.
    match obj.get("kind").and_then(Value::as_str) {
        Some("film") => MediaKind::Film,
        Some("tvshow") => MediaKind::TvShow,
        _ => MediaKind::Unknown,
    }
}

/// Classify a batch of records. Order-preserving: `classify(records)[i]`
/// is the kind of `records[i]`. An empty batch yields an empty result.
pub fn classify(records: &[Value]) -> Vec<MediaKind> {
    records.iter().map(classify_record).collect()
}

/// Group records by their classified kind, preserving per-kind input order.
pub fn bucket_by_kind(records: Vec<Value>) -> BTreeMap<MediaKind, Vec<Value>> {
    let mut buckets: BTreeMap<MediaKind, Vec<Value>> = BTreeMap::new();
    for record in records {
        let kind = classify_record(&record);
        buckets.entry(kind).or_default().push(record);
    }
    buckets
}

/// A raw record paired with its classified kind, as handed to display code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub kind: MediaKind,
    pub record: Value,
}

impl ClassifiedRecord {
    pub fn new(record: Value) -> Self {
        let kind = classify_record(&record);
        Self { kind, record }
    }

    /// Decode the raw record into its typed model. Fails for `Unknown`
    /// records or records whose body does not satisfy the typed schema.
    pub fn decode(&self) -> Result<crate::models::AnyMedia, serde_json::Error> {
        serde_json::from_value(self.record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_batch_yields_empty_result() {
        assert_eq!(classify(&[]), Vec::<MediaKind>::new());
    }

    #[test]
    fn album_by_structure() {
        let record = json!({
            "media_id": "0193f9c6-4a3c-7e2a-b1f0-111111111111",
            "name": "Morning Phase",
            "album_artists": [{"id": 1, "name": "Beck"}],
        });
        assert_eq!(classify_record(&record), MediaKind::Album);
    }

    #[test]
    fn album_ignores_extraneous_fields() {
        let record = json!({
            "media_id": "x",
            "album_artists": [],
            "release_date": "2014-02-21T00:00:00Z",
            "tracks": [],
            "some_future_field": {"nested": true},
        });
        assert_eq!(classify_record(&record), MediaKind::Album);
    }

    #[test]
    fn track_needs_all_three_discriminators() {
        let record = json!({
            "media_id": "t1",
            "album_id": "a1",
            "track_number": 4,
            "name": "Blue Moon",
        });
        assert_eq!(classify_record(&record), MediaKind::Track);

        let missing_album_id = json!({"media_id": "t1", "track_number": 4});
        assert_eq!(classify_record(&missing_album_id), MediaKind::Unknown);
    }

    #[test]
    fn book_by_structure() {
        let record = json!({
            "title": "The Dispossessed",
            "publication_date": "1974-05-01",
            "authors": [{"id": 7, "first_name": "Ursula", "last_name": "Le Guin"}],
            "pages": 341,
        });
        assert_eq!(classify_record(&record), MediaKind::Book);
    }

    #[test]
    fn film_and_tvshow_by_tag_only() {
        assert_eq!(
            classify_record(&json!({"kind": "film", "title": "Stalker"})),
            MediaKind::Film
        );
        assert_eq!(
            classify_record(&json!({"kind": "tvshow", "title": "Twin Peaks"})),
            MediaKind::TvShow
        );
        // No tag, no structure: never Film.
        assert_eq!(
            classify_record(&json!({"title": "Stalker", "created": "1979-05-25"})),
            MediaKind::Unknown
        );
    }

    #[test]
    fn structural_rules_beat_the_kind_tag() {
        // Precedence contract: an album-shaped record keeps its shape even
        // when the tag claims otherwise.
        let record = json!({
            "media_id": "a1",
            "album_artists": [],
            "kind": "tvshow",
        });
        assert_eq!(classify_record(&record), MediaKind::Album);

        let track = json!({
            "media_id": "t1",
            "album_id": "a1",
            "track_number": 1,
            "kind": "film",
        });
        assert_eq!(classify_record(&track), MediaKind::Track);
    }

    #[test]
    fn malformed_records_degrade_to_unknown() {
        assert_eq!(classify_record(&json!(null)), MediaKind::Unknown);
        assert_eq!(classify_record(&json!(42)), MediaKind::Unknown);
        assert_eq!(classify_record(&json!("album")), MediaKind::Unknown);
        assert_eq!(classify_record(&json!([])), MediaKind::Unknown);
        assert_eq!(classify_record(&json!({})), MediaKind::Unknown);
        assert_eq!(
            classify_record(&json!({"kind": "podcast"})),
            MediaKind::Unknown
        );
        // kind must be a string to count.
        assert_eq!(classify_record(&json!({"kind": 3})), MediaKind::Unknown);
    }

    #[test]
    fn batch_is_order_preserving() {
        let records = vec![
            json!({"kind": "film"}),
            json!({"media_id": "a", "album_artists": []}),
            json!({"bogus": true}),
            json!({"publication_date": "1974", "authors": [], "pages": 10}),
        ];
        assert_eq!(
            classify(&records),
            vec![
                MediaKind::Film,
                MediaKind::Album,
                MediaKind::Unknown,
                MediaKind::Book,
            ]
        );
    }

    #[test]
    fn classify_is_pure_and_does_not_mutate() {
        let records = vec![
            json!({"media_id": "a", "album_artists": [], "kind": "tvshow"}),
            json!({"kind": "film"}),
        ];
        let snapshot = records.clone();
        let first = classify(&records);
        let second = classify(&records);
        assert_eq!(first, second);
        assert_eq!(records, snapshot);

        // Deep-equal input built independently classifies identically.
        let rebuilt = vec![
            json!({"media_id": "a", "album_artists": [], "kind": "tvshow"}),
            json!({"kind": "film"}),
        ];
        assert_eq!(classify(&rebuilt), first);
    }

    #[test]
    fn buckets_group_by_kind_in_input_order() {
        let records = vec![
            json!({"kind": "film", "title": "first"}),
            json!({"media_id": "a", "album_artists": []}),
            json!({"kind": "film", "title": "second"}),
        ];
        let buckets = bucket_by_kind(records);
        assert_eq!(buckets[&MediaKind::Album].len(), 1);
        let films = &buckets[&MediaKind::Film];
        assert_eq!(films[0]["title"], "first");
        assert_eq!(films[1]["title"], "second");
        assert!(!buckets.contains_key(&MediaKind::Unknown));
    }

    #[test]
    fn kind_roundtrips_through_display_and_from_str() {
        for kind in [
            MediaKind::Album,
            MediaKind::Track,
            MediaKind::Book,
            MediaKind::Film,
            MediaKind::TvShow,
            MediaKind::Unknown,
        ] {
            assert_eq!(kind.to_string().parse::<MediaKind>().unwrap(), kind);
        }
        assert!("podcast".parse::<MediaKind>().is_err());
    }
}
