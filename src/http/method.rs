//! HTTP verbs the transport client can dispatch.

use strum::{Display, EnumIter, EnumString};

use crate::error::HttpError;

/// Fixed set of supported HTTP verbs.
///
/// Parsing is ASCII case-insensitive, so `"get"`, `"Get"` and `"GET"` all
/// select [`HttpMethod::Get`]. Anything else is rejected with
/// [`HttpError::BadMethod`] by [`HttpMethod::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Map a verb name onto the enum, failing with `BadMethod`.
    pub fn parse(name: &str) -> Result<Self, HttpError> {
        name.parse::<HttpMethod>()
            .map_err(|_| HttpError::BadMethod(name.to_string()))
    }

    #[cfg(feature = "http")]
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

#[cfg(feature = "http")]
impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        method.to_reqwest()
    }
}
