// ============================================================
// Layer 3 — Caption Record Domain Type
// ============================================================
// A caption record ties one image file name to every caption
// written for it, in source order.
//
// On disk a record is a single-entry JSON object:
//   {"1000268201_693b08cb0e.jpg": ["A child ...", "A girl ..."]}
//
// so Serialize is implemented by hand as a one-entry map rather
// than derived (a derive would emit {"image_id": .., "captions": ..}).
//
// Reference: Rust Book §5 (Structs and Methods)
//            serde documentation (Implementing Serialize)

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Image id → captions, in the order image ids were first seen.
///
/// IndexMap keeps insertion order so every consumer (record
/// writing, vocabulary building) iterates deterministically.
pub type CaptionsDict = IndexMap<String, Vec<String>>;

/// One image id and its ordered list of captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRecord {
    /// File name of the image, e.g. "1000268201_693b08cb0e.jpg"
    pub image_id: String,

    /// Every caption for this image, preserving source order
    pub captions: Vec<String>,
}

impl CaptionRecord {
    /// Create a new CaptionRecord
    pub fn new(image_id: impl Into<String>, captions: Vec<String>) -> Self {
        Self {
            image_id: image_id.into(),
            captions,
        }
    }
}

impl Serialize for CaptionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.image_id, &self.captions)?;
        map.end()
    }
}
