//! Data models mirroring the remote catalog's API
//!
//! Each sub-module covers one domain area of the catalog: generic media
//! metadata, music, books, film/TV, creator entities, and member profiles
//! with their follow/block relations.

mod books;
mod film_tv;
mod media;
mod member;
mod music;
mod people;

// Re-export all models for convenient imports
pub use books::*;
pub use film_tv::*;
pub use media::*;
pub use member::*;
pub use music::*;
pub use people::*;
