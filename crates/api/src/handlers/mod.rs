pub mod admin;
pub mod blog;
pub mod blog_ingest;
pub mod game;
pub mod logs;
pub mod playlist;
pub mod read;
pub mod screen;
pub mod travel;
