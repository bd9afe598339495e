/// One listing page as the server returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// Where the request ended up after redirects.
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl PageResponse {
    /// A `200 OK` HTML response, mainly for fetcher doubles.
    pub fn html(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    /// The `charset` parameter of the Content-Type header, if any.
    pub fn charset(&self) -> Option<&str> {
        let content_type = self.content_type.as_deref()?;
        content_type.split(';').skip(1).find_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(['"', '\'']))
        })
    }
}

/// Why a page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid page url: {0}")]
    InvalidUrl(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("too many redirects")]
    TooManyRedirects,
    #[error("page larger than {limit} bytes")]
    TooLarge { limit: u64 },
    #[error("not an html page ({0})")]
    NotHtml(String),
    #[error("connection failed: {0}")]
    Connection(String),
}

impl FetchError {
    /// The server said the page does not exist, which ends the listing.
    pub fn is_not_found(&self) -> bool {
        *self == FetchError::Status(404)
    }
}
