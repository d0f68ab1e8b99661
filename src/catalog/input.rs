use serde::Deserialize;

/// Optional overrides used to build a [`CatalogItem`](super::CatalogItem).
///
/// `None` means "use the default", `Some` replaces it verbatim.
///
/// Document keys use the camelCase names (`spotifyTrackId`, `youtubeId`).
/// Every key is optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemInput {
    /// Catalog identifier. Defaults to `-1` (unset).
    pub id: Option<i64>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    /// Release date or year, in whatever form the source provides.
    pub released: Option<String>,
    /// Track duration in seconds.
    pub seconds: Option<f64>,

    /// Whether playback should pause after this item.
    pub pause: Option<bool>,
    pub notes: Option<String>,

    /// Local file reference.
    pub file: Option<String>,
    pub spotify_track_id: Option<String>,
    pub youtube_id: Option<String>,
}
