// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure in the data and vocab layers is one of:
//
//   Parse / Record      → malformed input line
//   UnknownImage        → partition id missing from the captions
//   UnknownTokenId      → vocabulary id never assigned
//   InvalidVocabulary   → persisted vocabulary breaks an invariant
//   Io                  → filesystem failure, tagged with its path
//
// None of these are recovered locally. They propagate up to the
// application layer, where anyhow adds context and the batch job
// aborts.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use std::{io, path::{Path, PathBuf}};
use thiserror::Error;

use crate::domain::partition::Partition;

#[derive(Debug, Error)]
pub enum PrepError {
    /// A caption-source line could not be split into id and caption
    #[error("{}:{line}: malformed caption line: {message}", .path.display())]
    Parse {
        path:    PathBuf,
        line:    usize,
        message: String,
    },

    /// A captions.txt line is not a valid caption record
    #[error("{}:{line}: malformed caption record", .path.display())]
    Record {
        path:   PathBuf,
        line:   usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("image '{image_id}' listed for {partition} has no captions")]
    UnknownImage {
        image_id:  String,
        partition: Partition,
    },

    #[error("vocabulary id {0} was never assigned")]
    UnknownTokenId(usize),

    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("I/O failure on '{}'", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrepError {
    /// Returns a closure that tags an io::Error with `path`.
    /// Meant for `map_err(PrepError::io(&path))`.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> PrepError + '_ {
        move |source| PrepError::Io { path: path.to_path_buf(), source }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_keeps_path_and_source() {
        let err = PrepError::io(Path::new("missing.jpg"))(
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.jpg"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_message_has_line_number() {
        let err = PrepError::Parse {
            path:    PathBuf::from("tokens.txt"),
            line:    7,
            message: "no tab".into(),
        };
        assert_eq!(err.to_string(), "tokens.txt:7: malformed caption line: no tab");
    }

    #[test]
    fn test_unknown_image_names_partition() {
        let err = PrepError::UnknownImage {
            image_id:  "x.jpg".into(),
            partition: Partition::Dev,
        };
        assert!(err.to_string().contains("x.jpg"));
        assert!(err.to_string().contains("dev"));
    }
}
