// ============================================================
// Layer 4 — Dataset Segregator
// ============================================================
// Splits a flat image directory into train / dev / test.
//
// Inputs:
//   images_dir      — every image of the corpus, side by side
//   caption source  — image id → captions (see caption_reader)
//   id lists        — which image ids belong to which partition
//
// Output (under output_dir):
//   train/  <copied images>  captions.txt
//   dev/    <copied images>  captions.txt
//   test/   <copied images>  captions.txt
//
// Order of work:
//   1. Load the full caption mapping
//   2. Load all three id lists
//   3. Copy images for train, then dev, then test
//   4. Write captions.txt for train, then dev, then test
//
// Nothing here is recovered locally. A missing image or an id
// without captions aborts the run and leaves whatever was
// already written on disk; re-running from scratch overwrites it.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{caption_reader::TokenFile, id_loader::read_ids, records::write_caption_records};
use crate::domain::{error::PrepError, partition::Partition, traits::CaptionSource};

/// Paths of the three id-list files.
#[derive(Debug, Clone)]
pub struct PartitionIdPaths {
    pub train: PathBuf,
    pub dev:   PathBuf,
    pub test:  PathBuf,
}

impl PartitionIdPaths {
    pub fn get(&self, partition: Partition) -> &Path {
        match partition {
            Partition::Train => &self.train,
            Partition::Dev   => &self.dev,
            Partition::Test  => &self.test,
        }
    }
}

/// What one partition ended up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionSummary {
    pub partition:       Partition,
    pub ids:             usize,
    pub images_copied:   usize,
    pub records_written: usize,
}

/// Per-partition counts for a finished run, in train/dev/test order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegregationSummary {
    pub partitions: Vec<PartitionSummary>,
}

impl SegregationSummary {
    pub fn get(&self, partition: Partition) -> Option<&PartitionSummary> {
        self.partitions.iter().find(|p| p.partition == partition)
    }

    pub fn total_images(&self) -> usize {
        self.partitions.iter().map(|p| p.images_copied).sum()
    }

    pub fn total_records(&self) -> usize {
        self.partitions.iter().map(|p| p.records_written).sum()
    }
}

/// Writes partition directories below a fixed output root.
#[derive(Debug, Clone)]
pub struct Segregator {
    output_dir: PathBuf,
}

impl Segregator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    /// Directory that receives a partition's images and captions.txt
    pub fn partition_dir(&self, partition: Partition) -> PathBuf {
        self.output_dir.join(partition.dir_name())
    }

    /// Run the full split. See the module header for the order of work.
    pub fn segregate<S: CaptionSource + ?Sized>(
        &self,
        images_dir: &Path,
        source:     &S,
        id_paths:   &PartitionIdPaths,
    ) -> Result<SegregationSummary, PrepError> {
        // ── Step 1: image id → captions ──────────────────────────────────────
        let captions = source.load_captions()?;
        tracing::info!("Loaded captions for {} images", captions.len());

        // ── Step 2: id lists ─────────────────────────────────────────────────
        let mut partitions = Vec::with_capacity(Partition::ALL.len());
        for partition in Partition::ALL {
            let ids = read_ids(id_paths.get(partition))?;
            tracing::info!("{}: {} image ids", partition, ids.len());
            partitions.push((partition, ids));
        }

        // ── Step 3: copy images ──────────────────────────────────────────────
        let mut copied = Vec::with_capacity(partitions.len());
        for (partition, ids) in &partitions {
            let n = copy_images(images_dir, &self.partition_dir(*partition), ids)?;
            tracing::info!("{}: copied {} images", partition, n);
            copied.push(n);
        }

        // ── Step 4: caption records ──────────────────────────────────────────
        let mut summary = SegregationSummary::default();
        for ((partition, ids), images_copied) in partitions.iter().zip(copied) {
            let dir             = self.partition_dir(*partition);
            let records_written = write_caption_records(&dir, *partition, ids, &captions)?;
            tracing::info!("{}: wrote {} caption records", partition, records_written);

            summary.partitions.push(PartitionSummary {
                partition: *partition,
                ids: ids.len(),
                images_copied,
                records_written,
            });
        }

        Ok(summary)
    }
}

/// Split the corpus with the caption source at `caption_source_path`,
/// writing train/ dev/ test/ under `output_dir`.
pub fn segregate(
    images_dir:          &Path,
    caption_source_path: &Path,
    id_paths:            &PartitionIdPaths,
    output_dir:          &Path,
) -> Result<SegregationSummary, PrepError> {
    Segregator::new(output_dir).segregate(images_dir, &TokenFile::new(caption_source_path), id_paths)
}

/// Copy `<dir_input>/<id>` to `<dir_output>/<id>` for every id,
/// creating `dir_output` first. Existing files are overwritten.
pub fn copy_images(dir_input: &Path, dir_output: &Path, ids: &[String]) -> Result<usize, PrepError> {
    fs::create_dir_all(dir_output).map_err(PrepError::io(dir_output))?;

    for id in ids {
        let from = dir_input.join(id);
        let to   = dir_output.join(id);
        fs::copy(&from, &to).map_err(PrepError::io(&from))?;
    }

    Ok(ids.len())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::{load_captions, CAPTIONS_FILE};
    use tempfile::TempDir;

    /// Five images with two captions each, plus id files sized 3/0/2.
    struct Fixture {
        root:     TempDir,
        images:   PathBuf,
        tokens:   PathBuf,
        id_paths: PartitionIdPaths,
    }

    fn fixture(train: &[&str], dev: &[&str], test: &[&str]) -> Fixture {
        let root   = tempfile::tempdir().unwrap();
        let images = root.path().join("Images");
        fs::create_dir_all(&images).unwrap();

        let mut tokens_text = String::new();
        for i in 1..=5 {
            let id = format!("img{i}.jpg");
            fs::write(images.join(&id), format!("bytes of {id}")).unwrap();
            tokens_text.push_str(&format!("{id}#0\tfirst caption of {i}\n"));
            tokens_text.push_str(&format!("{id}#1\tsecond caption of {i}\n"));
        }
        let tokens = root.path().join("tokens.txt");
        fs::write(&tokens, tokens_text).unwrap();

        let write_ids = |name: &str, ids: &[&str]| {
            let path = root.path().join(name);
            let body: String = ids.iter().map(|id| format!("{id}\n")).collect();
            fs::write(&path, body).unwrap();
            path
        };
        let id_paths = PartitionIdPaths {
            train: write_ids("train.txt", train),
            dev:   write_ids("dev.txt", dev),
            test:  write_ids("test.txt", test),
        };

        Fixture { root, images, tokens, id_paths }
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_copies_and_writes_one_record_per_id() {
        let f   = fixture(&["img3.jpg", "img1.jpg", "img5.jpg"], &[], &["img2.jpg", "img4.jpg"]);
        let out = f.root.path().join("out");

        let summary = segregate(&f.images, &f.tokens, &f.id_paths, &out).unwrap();
        assert_eq!(summary.total_images(), 5);
        assert_eq!(summary.total_records(), 5);
        assert_eq!(summary.get(Partition::Dev).unwrap().images_copied, 0);

        // 3 images + captions.txt, 0 + captions.txt, 2 + captions.txt
        assert_eq!(file_count(&out.join("train")), 4);
        assert_eq!(file_count(&out.join("dev")), 1);
        assert_eq!(file_count(&out.join("test")), 3);

        let copied = fs::read_to_string(out.join("train").join("img5.jpg")).unwrap();
        assert_eq!(copied, "bytes of img5.jpg");
    }

    #[test]
    fn test_records_follow_id_list_order() {
        let f   = fixture(&["img3.jpg", "img1.jpg", "img5.jpg"], &[], &["img2.jpg"]);
        let out = f.root.path().join("out");
        segregate(&f.images, &f.tokens, &f.id_paths, &out).unwrap();

        let train = load_captions(&out.join("train")).unwrap();
        let keys: Vec<&str> = train.keys().map(String::as_str).collect();
        assert_eq!(keys, ["img3.jpg", "img1.jpg", "img5.jpg"]);
        assert_eq!(train["img1.jpg"], ["first caption of 1", "second caption of 1"]);

        let dev = fs::read_to_string(out.join("dev").join(CAPTIONS_FILE)).unwrap();
        assert!(dev.is_empty());
    }

    #[test]
    fn test_missing_image_is_io_error() {
        let f   = fixture(&["img1.jpg", "ghost.jpg"], &[], &[]);
        let out = f.root.path().join("out");

        let err = segregate(&f.images, &f.tokens, &f.id_paths, &out).unwrap_err();
        assert!(matches!(err, PrepError::Io { ref path, .. } if path.ends_with("ghost.jpg")));
        // Nothing reaches the caption-writing step
        assert!(!out.join("train").join(CAPTIONS_FILE).exists());
    }

    #[test]
    fn test_id_without_captions_is_lookup_error() {
        let f = fixture(&["img1.jpg"], &[], &["img2.jpg", "extra.jpg"]);
        // The image exists on disk but has no captions
        fs::write(f.images.join("extra.jpg"), "bytes").unwrap();
        let out = f.root.path().join("out");

        let err = segregate(&f.images, &f.tokens, &f.id_paths, &out).unwrap_err();
        assert!(matches!(
            err,
            PrepError::UnknownImage { ref image_id, partition: Partition::Test } if image_id == "extra.jpg"
        ));

        // Earlier partitions were finished, the failing one has no captions.txt
        assert!(out.join("train").join(CAPTIONS_FILE).exists());
        assert!(!out.join("test").join(CAPTIONS_FILE).exists());
    }

    #[test]
    fn test_rerun_overwrites_outputs() {
        let f   = fixture(&["img1.jpg"], &["img2.jpg"], &["img3.jpg"]);
        let out = f.root.path().join("out");

        segregate(&f.images, &f.tokens, &f.id_paths, &out).unwrap();
        let second = segregate(&f.images, &f.tokens, &f.id_paths, &out).unwrap();
        assert_eq!(second.total_records(), 3);
        assert_eq!(file_count(&out.join("dev")), 2);
    }

    #[test]
    fn test_copy_images_creates_output_dir() {
        let f    = fixture(&[], &[], &[]);
        let dest = f.root.path().join("nested").join("dir");
        let n    = copy_images(&f.images, &dest, &["img4.jpg".to_string()]).unwrap();
        assert_eq!(n, 1);
        assert!(dest.join("img4.jpg").exists());
    }
}
