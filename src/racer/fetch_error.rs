#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}
