// ============================================================
// Layer 4 — Caption Records File (captions.txt)
// ============================================================
// Each partition directory holds one captions.txt with one
// caption record per line:
//
//   {"1000268201_693b08cb0e.jpg": ["A child ...", "A girl ..."]}
//   {"1001773457_577c3a7d70.jpg": ["A black dog ...", ...]}
//
// Lines are separated by a single "\n" and there is NO newline
// after the last record.
//
// serde_json's compact output has no spaces after ',' and ':'
// and writes non-ASCII text as raw UTF-8. AsciiSpacedFormatter
// adds the spaces and escapes every non-ASCII character as
// \uXXXX (UTF-16 surrogate pairs above U+FFFF), so the file
// matches the layout other tooling already expects byte-for-byte.
//
// Reference: serde_json documentation (Formatter trait)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::domain::{
    caption_record::{CaptionRecord, CaptionsDict},
    error::PrepError,
    partition::Partition,
    traits::CaptionSource,
};

/// Fixed file name of the caption records inside a partition directory
pub const CAPTIONS_FILE: &str = "captions.txt";

// ─── Formatting ───────────────────────────────────────────────────────────────

/// JSON formatter that writes ", " between items, ": " after keys
/// and only ASCII bytes.
struct AsciiSpacedFormatter;

impl Formatter for AsciiSpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and control characters are escaped by
    // serde_json before a fragment gets here
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialise one record into `out` (no trailing newline).
fn write_record<W: io::Write>(out: W, record: &CaptionRecord) -> io::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(out, AsciiSpacedFormatter);
    record.serialize(&mut ser).map_err(io::Error::from)
}

/// Render one record as it appears on a captions.txt line.
pub fn format_record(record: &CaptionRecord) -> io::Result<String> {
    let mut buf = Vec::new();
    write_record(&mut buf, record)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

// ─── Writing ──────────────────────────────────────────────────────────────────

/// Write `<dir>/captions.txt` with one record per id, in `ids` order.
///
/// All records are looked up before the file is created, so an id
/// missing from `captions` fails with UnknownImage and leaves no
/// captions.txt behind. Returns the number of records written.
pub fn write_caption_records(
    dir:       &Path,
    partition: Partition,
    ids:       &[String],
    captions:  &CaptionsDict,
) -> Result<usize, PrepError> {
    let records = ids
        .iter()
        .map(|id| {
            captions
                .get(id)
                .map(|caps| CaptionRecord::new(id.clone(), caps.clone()))
                .ok_or_else(|| PrepError::UnknownImage {
                    image_id: id.clone(),
                    partition,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let path = dir.join(CAPTIONS_FILE);
    write_records_file(&path, &records).map_err(PrepError::io(&path))?;

    tracing::debug!("Wrote {} caption records to '{}'", records.len(), path.display());
    Ok(records.len())
}

fn write_records_file(path: &Path, records: &[CaptionRecord]) -> io::Result<()> {
    // The handle is closed when `out` drops, on success or error
    let mut out = BufWriter::new(File::create(path)?);

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        write_record(&mut out, record)?;
    }

    out.flush()
}

// ─── Reading ──────────────────────────────────────────────────────────────────

/// A partition directory's captions.txt, read back as a CaptionSource.
#[derive(Debug, Clone)]
pub struct CaptionRecords {
    dir: PathBuf,
}

impl CaptionRecords {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CaptionSource for CaptionRecords {
    fn load_captions(&self) -> Result<CaptionsDict, PrepError> {
        load_captions(&self.dir)
    }
}

/// Load `<captions_dir>/captions.txt` into one image id → captions map.
///
/// Every line is a JSON object; all of its entries are merged into
/// the result. A repeated image id takes the later captions but
/// keeps its first position.
pub fn load_captions(captions_dir: &Path) -> Result<CaptionsDict, PrepError> {
    let path    = captions_dir.join(CAPTIONS_FILE);
    let content = fs::read_to_string(&path).map_err(PrepError::io(&path))?;

    let mut captions = CaptionsDict::new();
    for (idx, line) in content.split_terminator('\n').enumerate() {
        let entry: IndexMap<String, Vec<String>> =
            serde_json::from_str(line).map_err(|source| PrepError::Record {
                path: path.clone(),
                line: idx + 1,
                source,
            })?;
        captions.extend(entry);
    }

    tracing::debug!("Loaded {} caption records from '{}'", captions.len(), path.display());
    Ok(captions)
}
