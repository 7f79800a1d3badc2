use thiserror::Error;
#[derive(Debug, Error)]
pub enum PathtreeError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl PathtreeError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        PathtreeError::Io { context, source }
    }
    /// True when the reader on the other end of stdout went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            PathtreeError::Io { source, .. } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}
