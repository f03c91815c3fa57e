// ============================================================
// Layer 4 — Caption Source Reader
// ============================================================
// Reads the raw caption source, one caption per line:
//
//   1000268201_693b08cb0e.jpg#0\tA child in a pink dress ...\n
//   1000268201_693b08cb0e.jpg#1\tA girl going into a ...\n
//   └──── image id ─────────┘ └ caption index
//
// Each line is split on the FIRST tab only, so a caption that
// itself contains tabs survives intact. Only the trailing "\n"
// is removed. The image id is everything before the first '#'.
//
// A line without a tab or without a '#' is a fatal parse error.
// Skipping it would silently drop captions from the dataset.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §9 (Error Handling)

use std::{fs, path::{Path, PathBuf}};

use crate::domain::{
    caption_record::CaptionsDict,
    error::PrepError,
    traits::CaptionSource,
};

/// The tab-separated caption source file (e.g. Flickr8k.token.txt).
/// Implements the CaptionSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CaptionSource for TokenFile {
    fn load_captions(&self) -> Result<CaptionsDict, PrepError> {
        read_captions(&self.path)
    }
}

/// Read the caption source at `path` into an image id → captions map.
/// Captions are appended in file order; image ids keep the order in
/// which they first appear.
pub fn read_captions(path: &Path) -> Result<CaptionsDict, PrepError> {
    let content = fs::read_to_string(path).map_err(PrepError::io(path))?;
    let captions = parse_captions(&content, path)?;

    tracing::debug!(
        "Read captions for {} images from '{}'",
        captions.len(),
        path.display()
    );
    Ok(captions)
}

/// Parse the whole text of a caption source. `path` is only used
/// to label errors.
pub fn parse_captions(content: &str, path: &Path) -> Result<CaptionsDict, PrepError> {
    let mut captions = CaptionsDict::new();

    // split_terminator drops the empty piece after a final "\n"
    // but keeps a last line that has no newline at all
    for (idx, line) in content.split_terminator('\n').enumerate() {
        let (image_id, caption) = parse_caption_line(line).map_err(|message| {
            PrepError::Parse {
                path:    path.to_path_buf(),
                line:    idx + 1,
                message: message.to_string(),
            }
        })?;

        captions
            .entry(image_id.to_string())
            .or_default()
            .push(caption.to_string());
    }

    Ok(captions)
}

/// Split one line (without its newline) into (image_id, caption).
pub fn parse_caption_line(line: &str) -> Result<(&str, &str), &'static str> {
    let (key, caption) = line
        .split_once('\t')
        .ok_or("missing tab between image id and caption")?;

    let (image_id, _caption_index) = key
        .split_once('#')
        .ok_or("missing '#' between image id and caption index")?;

    Ok((image_id, caption))
}
