//! Repositories, one per table.
//!
//! Each repository is a zero-sized struct whose associated functions take a
//! `&PgPool` and return `sqlx::Error` on failure. Lookups that can miss
//! return `Option`, so the caller decides what "not found" means.

pub mod blog_repo;
pub mod feed_repo;
pub mod game_log_repo;
pub mod game_repo;
pub mod playlist_repo;
pub mod playlist_song_repo;
pub mod read_log_repo;
pub mod read_repo;
pub mod screen_log_repo;
pub mod screen_repo;
pub mod travel_log_repo;
pub mod travel_repo;

pub use blog_repo::BlogRepo;
pub use feed_repo::LogFeedRepo;
pub use game_log_repo::GameLogRepo;
pub use game_repo::GameRepo;
pub use playlist_repo::PlaylistRepo;
pub use playlist_song_repo::PlaylistSongRepo;
pub use read_log_repo::ReadLogRepo;
pub use read_repo::ReadRepo;
pub use screen_log_repo::ScreenLogRepo;
pub use screen_repo::ScreenRepo;
pub use travel_log_repo::TravelLogRepo;
pub use travel_repo::TravelRepo;
