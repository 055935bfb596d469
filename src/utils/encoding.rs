//! Strict UTF-8 file reading

use std::fs;
use std::io;
use std::path::Path;

/// Read a whole file as UTF-8.
///
/// Malformed byte sequences are an error (`InvalidData`) rather than being
/// replaced. A leading byte order mark is kept as part of the content.
pub fn read_utf8(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
        })
}
