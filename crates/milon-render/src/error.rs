#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid web origin: {0}")]
    Origin(#[from] url::ParseError),
}
