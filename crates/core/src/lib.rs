//! Domain rules for the folio backend.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! depend on these types and validators so the rules live in one place.

pub mod blog;
pub mod catalog;
pub mod error;
pub mod markdown;
pub mod playlist;
pub mod secret;
pub mod types;
