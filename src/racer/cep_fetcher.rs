use crate::racer::fetch_error::FetchError;
use crate::racer::fetch_result::FetchResult;
use url::Url;

pub struct CepFetcher {}

impl CepFetcher {
    pub fn new() -> Self {
        Self {}
    }

    /// Fetches `url`, folding every failure into the empty result. The
    /// racer only ever sees a `FetchResult`, never an error.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        match self.try_fetch(url).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("request to {} failed: {}", url, e);
                FetchResult::empty()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let parsed_url = Url::parse(url)?;
        let origin = parsed_url
            .host_str()
            .ok_or_else(|| FetchError::MissingHost(url.to_string()))?
            .to_string();

        // No per-request timeout; the race window is the only deadline.
        // Error statuses still carry a body worth showing, so the status
        // code is not checked here.
        let response = reqwest::get(parsed_url).await?;
        let body = response.text().await?;

        Ok(FetchResult::new(origin, body))
    }
}
