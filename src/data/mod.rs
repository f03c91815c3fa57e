// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer owns every file format the job reads or writes
// and the routine that splits the corpus into partitions.
//
// The pipeline flows in this order:
//
//   Flickr8k.token.txt          Flickr_8k.{train,dev,test}Images.txt
//       │                                 │
//       ▼                                 ▼
//   caption_reader  → id → captions   id_loader → ordered ids
//       │                                 │
//       └──────────────┬──────────────────┘
//                      ▼
//   segregator      → copies images into train/ dev/ test/
//                      │
//                      ▼
//   records         → writes one caption record per line
//                     into <partition>/captions.txt
//
// records also reads captions.txt back, which is where the
// vocabulary builder gets its training captions from.
//
// Reference: Rust Book §8 (Collections)
//            Rust Book §12 (I/O and File Handling)

/// Parses the tab-separated caption source file
pub mod caption_reader;

/// Reads partition id-list files
pub mod id_loader;

/// Writes and reads captions.txt caption-record files
pub mod records;

/// Copies images into partition directories and writes their captions
pub mod segregator;
