//! Directory-scan mode: translates every inspect file in a directory.
use std::path::Path;

use crate::error::Result;
use crate::input;
use crate::inspect;
use crate::translate::{translate, OutputStyle};

/// Outcome for one scanned file.
pub struct ScanEntry {
    pub name: String,
    pub result: Result<String>,
}

/// Translates every file with the scan extension under `dir`, in listing
/// order. A file that fails to read, parse, or translate contributes its
/// error to the returned list instead of halting the scan; only a failure to
/// list the directory itself aborts.
pub fn scan<P: AsRef<Path>>(dir: P, style: OutputStyle) -> Result<Vec<ScanEntry>> {
    let mut entries = Vec::new();
    for path in input::scan_dir(dir)? {
        let result = input::read_file(&path)
            .and_then(|text| inspect::parse(&text))
            .and_then(|doc| translate(&doc, style));
        entries.push(ScanEntry {
            name: input::base_name(&path),
            result,
        });
    }

    Ok(entries)
}
