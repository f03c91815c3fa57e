// ============================================================
// Layer 3 — Partition Domain Type
// ============================================================
// The corpus is split into three disjoint partitions. Each one
// becomes a directory of the same name holding the copied
// images and a captions.txt file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three dataset splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Train,
    Dev,
    Test,
}

impl Partition {
    /// Every partition, in processing order
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Dev, Partition::Test];

    /// Directory name used for this partition's output
    pub fn dir_name(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Dev   => "dev",
            Partition::Test  => "test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
