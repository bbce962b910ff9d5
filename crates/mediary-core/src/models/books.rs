use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::people::Person;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub media_id: Uuid,
    pub title: String,
    pub authors: Option<Vec<Person>>,
    #[serde(default)]
    pub publisher: Option<String>,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub pages: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_decodes_with_minimal_fields() {
        let value = json!({
            "media_id": "0193f9c6-4a3c-7e2a-b1f0-1234567890ab",
            "title": "The Dispossessed",
            "authors": null,
            "publication_date": "1974-05-01",
            "pages": 341,
        });
        let book: Book = serde_json::from_value(value).unwrap();
        assert!(book.authors.is_none());
        assert!(book.isbn.is_none());
        assert_eq!(book.pages, 341);
    }
}
