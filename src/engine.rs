use crate::error::PathtreeError;
use crate::options::PathtreeOptions;
use crate::types::PathtreeResult;
use std::io::BufRead;
#[cfg(feature = "logging")]
use tracing;

/// Reads one line without its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of input. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
fn read_path<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
) -> Result<Option<String>, PathtreeError> {
    buf.clear();
    let read = input
        .read_until(b'\n', buf)
        .map_err(|e| PathtreeError::io("reading input", e))?;
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Builds a [`PathTree`](crate::PathTree) from every line of `input`, one path per line.
///
/// # Errors
///
/// Fails with [`PathtreeError::Io`] if reading fails.
pub fn pathtree<R: BufRead>(
    mut input: R,
    options: &PathtreeOptions,
) -> Result<PathtreeResult, PathtreeError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Reading paths split on '{}'", options.separator);
    let mut result = PathtreeResult::default();
    let mut buf = Vec::new();
    while let Some(path) = read_path(&mut input, &mut buf)? {
        result.tree.insert(&path, &options.separator);
        result.paths_read += 1;
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Read {} paths into {} nodes",
        result.paths_read,
        result.tree.node_count()
    );
    Ok(result)
}
