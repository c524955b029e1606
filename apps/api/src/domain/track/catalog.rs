/// Identifier of a catalog track
pub type TrackId = i64;

/// A read-only catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: &'static str,
    pub artist: &'static str,
}

/// The fixed track catalog
///
/// Tracks are never created, updated or deleted at runtime.
pub const CATALOG: [Track; 5] = [
    Track {
        id: 101,
        title: "Spring flower",
        artist: "Artist A",
    },
    Track {
        id: 102,
        title: "Summer Vibe",
        artist: "Artist B",
    },
    Track {
        id: 103,
        title: "Autumn morning",
        artist: "Artist C",
    },
    Track {
        id: 104,
        title: "Winter dream",
        artist: "Artist D",
    },
    Track {
        id: 105,
        title: "All weather",
        artist: "Artist E",
    },
];

/// Looks up a track by id
pub fn find(id: TrackId) -> Option<&'static Track> {
    CATALOG.iter().find(|track| track.id == id)
}

/// Returns true if the catalog holds a track with this id
///
/// # Example
/// ```
/// use playlist_api::domain::track::catalog;
///
/// assert!(catalog::contains(101));
/// assert!(!catalog::contains(999));
/// ```
pub fn contains(id: TrackId) -> bool {
    find(id).is_some()
}

/// All catalog ids, in catalog order
pub fn track_ids() -> Vec<TrackId> {
    CATALOG.iter().map(|track| track.id).collect()
}

/// Returns the first id in `ids` that is not in the catalog
///
/// Scans in input order and stops at the first miss.
pub fn first_unknown(ids: &[TrackId]) -> Option<TrackId> {
    ids.iter().copied().find(|id| !contains(*id))
}
