/// Outcome of a single fetch task: the host that answered plus the raw
/// response body. An empty origin marks a failed fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchResult {
    origin: String,
    body: Option<String>,
}

impl FetchResult {
    pub fn new(origin: String, body: String) -> Self {
        Self {
            origin,
            body: Some(body),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_empty()
    }
}
