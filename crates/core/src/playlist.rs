//! Playlist and song input rules.

use crate::blog::is_blank;
use crate::error::CoreError;

/// A playlist needs a non-blank name.
pub fn validate_playlist_name(name: Option<&str>) -> Result<(), CoreError> {
    if is_blank(name) {
        return Err(CoreError::Validation("Playlist name is required".into()));
    }
    Ok(())
}

/// A song needs a non-blank title and artist.
pub fn validate_song(title: Option<&str>, artist: Option<&str>) -> Result<(), CoreError> {
    if is_blank(title) || is_blank(artist) {
        return Err(CoreError::Validation(
            "Song title and artist are required".into(),
        ));
    }
    Ok(())
}

/// Position for the next appended song given the current maximum.
///
/// Positions start at 0 and always move past the highest existing value;
/// gaps left by deletions are never reused.
pub fn next_position(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_playlist_starts_at_zero() {
        assert_eq!(next_position(None), 0);
    }

    #[test]
    fn next_position_is_past_max() {
        assert_eq!(next_position(Some(0)), 1);
        assert_eq!(next_position(Some(41)), 42);
    }

    #[test]
    fn song_requires_title_and_artist() {
        assert!(validate_song(Some("Song"), Some("Artist")).is_ok());
        assert!(validate_song(Some("Song"), None).is_err());
        assert!(validate_song(Some(" "), Some("Artist")).is_err());
    }

    #[test]
    fn playlist_name_must_not_be_blank() {
        assert!(validate_playlist_name(Some("Late night")).is_ok());
        assert!(validate_playlist_name(Some("   ")).is_err());
        assert!(validate_playlist_name(None).is_err());
    }
}
