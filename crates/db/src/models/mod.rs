//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO; every `PUT` overwrites all writable columns

pub mod blog;
pub mod feed;
pub mod game;
pub mod playlist;
pub mod read;
pub mod screen;
pub mod travel;
