//! Table-of-contents extraction from markdown headings.
//!
//! Every line is handled on its own: a line starting with two or more `#`
//! becomes one list entry, anything else is skipped.

mod entry;
mod error;
mod heading;
mod line;

pub use entry::{make_entry, render_entry, TocEntry};
pub use error::{ExitCode, TocError, TocResult};
pub use heading::{make_anchor, parse_heading, Heading};
pub use line::{read_lines, LineRecord};

use log::{debug, trace};
use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};

/// Build entries for every sub-heading, in document order.
pub fn generate_toc(lines: &[LineRecord]) -> Vec<TocEntry> {
    lines
        .iter()
        .filter_map(|line| {
            let entry = make_entry(&line.text)?;
            trace!("line {}: level {} heading '{}'", line.number, entry.level, entry.text);
            Some(entry.with_line(line.number))
        })
        .collect()
}

pub fn toc_from_reader<R: Read>(reader: &mut BufReader<R>) -> TocResult<Vec<TocEntry>> {
    let lines = read_lines(reader)?;
    debug!("read {} lines", lines.len());
    Ok(generate_toc(&lines))
}

pub fn toc_from_path(path: &Path) -> TocResult<Vec<TocEntry>> {
    let with_path = |source| TocError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(with_path)?;
    let mut reader = BufReader::new(file);
    let lines = read_lines(&mut reader).map_err(with_path)?;
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(generate_toc(&lines))
}

/// Write one entry per line and flush.
pub fn write_toc<W: Write>(writer: &mut W, entries: &[TocEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()
}
