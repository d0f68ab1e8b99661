use std::time::Duration;

use super::input::ItemInput;

/// One media track in the catalog.
///
/// Every field is always present. Values are stored as given; nothing here
/// checks that `seconds` is non-negative or that the identifiers are well
/// formed.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: i64,
    pub artist: String,
    pub title: String,
    pub album: String,
    pub released: String,
    pub seconds: f64,

    pub pause: bool,
    pub notes: String,

    pub file: String,
    pub spotify_track_id: String,
    pub youtube_id: String,
}

impl CatalogItem {
    /// Identifier of an item that was never assigned one.
    pub const DEFAULT_ID: i64 = -1;

    /// Build an item, filling every field `input` leaves out with its default.
    pub fn new(input: Option<ItemInput>) -> Self {
        input.map(Self::from).unwrap_or_default()
    }

    /// `seconds` as a `Duration`, or `None` if it is negative or not finite.
    pub fn duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.seconds).ok()
    }
}

impl Default for CatalogItem {
    fn default() -> Self {
        Self {
            id: Self::DEFAULT_ID,
            artist: String::new(),
            title: String::new(),
            album: String::new(),
            released: String::new(),
            seconds: 0.0,
            pause: false,
            notes: String::new(),
            file: String::new(),
            spotify_track_id: String::new(),
            youtube_id: String::new(),
        }
    }
}

impl From<ItemInput> for CatalogItem {
    fn from(input: ItemInput) -> Self {
        let ItemInput {
            id,
            artist,
            title,
            album,
            released,
            seconds,
            pause,
            notes,
            file,
            spotify_track_id,
            youtube_id,
        } = input;

        Self {
            id: id.unwrap_or(Self::DEFAULT_ID),
            artist: artist.unwrap_or_default(),
            title: title.unwrap_or_default(),
            album: album.unwrap_or_default(),
            released: released.unwrap_or_default(),
            seconds: seconds.unwrap_or_default(),
            pause: pause.unwrap_or_default(),
            notes: notes.unwrap_or_default(),
            file: file.unwrap_or_default(),
            spotify_track_id: spotify_track_id.unwrap_or_default(),
            youtube_id: youtube_id.unwrap_or_default(),
        }
    }
}
