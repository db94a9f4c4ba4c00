/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::SmugMugError;
use crate::v1::parsers::{ScanCursor, find_name, find_value};
use log::{debug, trace};
use serde::Serialize;

const ALBUM_ID_FIELD: &str = "Album id";
const ALBUM_KEY_FIELD: &str = "Key";
const ALBUM_TITLE_FIELD: &str = "Title";

/// One album as returned from `smugmug.albums.get`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AlbumRecord {
    pub id: String,
    pub key: String,
    pub title: String,
}

impl AlbumRecord {
    pub fn new(id: impl Into<String>, key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Albums in the order they were found in the response.
///
/// Records can only be added; nothing is removed or reordered once pushed.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AlbumRegistry {
    albums: Vec<AlbumRecord>,
}

impl AlbumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, album: AlbumRecord) {
        self.albums.push(album);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlbumRecord> {
        self.albums.iter()
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Albums as a pretty printed JSON array
    pub fn to_json(&self) -> Result<String, SmugMugError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a AlbumRegistry {
    type Item = &'a AlbumRecord;
    type IntoIter = std::slice::Iter<'a, AlbumRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AlbumRegistry {
    type Item = AlbumRecord;
    type IntoIter = std::vec::IntoIter<AlbumRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.albums.into_iter()
    }
}

/// Decodes the body of a `smugmug.albums.get` response.
///
/// Albums are read as `Album id`, `Key`, `Title` groups from left to right. Scanning stops
/// at the first group missing one of its fields and that partial group is dropped.
pub fn decode_albums(body: &[u8]) -> Result<AlbumRegistry, SmugMugError> {
    trace!("albums response: {}", String::from_utf8_lossy(body));

    let mut registry = AlbumRegistry::new();
    let mut cursor = ScanCursor::start();

    // Every group consumes at least one byte so this never runs past the body length.
    for _ in 0..=body.len() {
        let Some(id) = find_value(body, ALBUM_ID_FIELD, cursor)? else {
            break;
        };
        // Key and Title have to appear before the next album starts.
        let group_end = find_name(body, ALBUM_ID_FIELD, id.end)
            .map_or(body.len(), |next| next.offset());
        let group = &body[..group_end];
        let Some(key) = find_value(group, ALBUM_KEY_FIELD, id.end)? else {
            break;
        };
        let Some(title) = find_value(group, ALBUM_TITLE_FIELD, key.end)? else {
            break;
        };
        cursor = title.end;

        debug!("found album {}: {}", id.value, title.value);
        registry.push(AlbumRecord::new(id.value, key.value, title.value));
    }

    Ok(registry)
}
