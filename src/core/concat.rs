use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Copies `reader` to `writer` byte-for-byte until end-of-stream and returns
/// the number of bytes moved.
pub fn copy_stream<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let copied = io::copy(reader, writer)?;
    Ok(copied)
}

/// Copies each file to `writer` in argument order. The first open or read
/// error aborts the run; files after the failing one are never touched.
pub fn concat_files<P: AsRef<Path>, W: Write>(paths: &[P], writer: &mut W) -> Result<u64> {
    let mut total = 0;
    for path in paths {
        let path = path.as_ref();
        tracing::debug!("Copying {}", path.display());
        let mut file = File::open(path)?;
        total += io::copy(&mut file, writer)?;
    }
    Ok(total)
}
