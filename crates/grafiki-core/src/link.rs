//! Link assembly: `<base_url>/d#<token>`.

use crate::codec::{EncodedToken, TOKEN_SEPARATOR};
use crate::error::BridgeError;
use std::fmt;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.grafiki.app";

/// A validated base URL without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Trim surrounding whitespace and trailing `/`, then require an absolute
    /// http(s) URL with no query or fragment (the token goes into the fragment).
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(BridgeError::Configuration(
                "base_url is empty".to_string(),
            ));
        }
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| BridgeError::Configuration(format!("base_url {trimmed:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BridgeError::Configuration(format!(
                "base_url {trimmed:?}: scheme must be http or https"
            )));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(BridgeError::Configuration(format!(
                "base_url {trimmed:?}: missing host"
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(BridgeError::Configuration(format!(
                "base_url {trimmed:?}: must not carry a query or fragment"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `self + "/d#" + token`.
    pub fn link(&self, token: &EncodedToken) -> String {
        let mut url = String::with_capacity(self.0.len() + TOKEN_SEPARATOR.len() + token.len());
        url.push_str(&self.0);
        url.push_str(TOKEN_SEPARATOR);
        url.push_str(token.as_str());
        url
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate `base_url` and join it with `token`.
pub fn assemble(base_url: &str, token: &EncodedToken) -> Result<String, BridgeError> {
    Ok(BaseUrl::parse(base_url)?.link(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::dataset::Dataset;

    fn token() -> EncodedToken {
        encode(&Dataset::from_records(vec![], "t", vec![]).unwrap()).unwrap()
    }

    #[test]
    fn strips_trailing_slashes() {
        let t = token();
        assert_eq!(
            assemble("https://host/", &t).unwrap(),
            format!("https://host/d#{t}")
        );
        assert_eq!(
            assemble("https://host///", &t).unwrap(),
            format!("https://host/d#{t}")
        );
        assert_eq!(
            assemble("https://host/app/", &t).unwrap(),
            format!("https://host/app/d#{t}")
        );
    }

    #[test]
    fn default_base_url() {
        let t = token();
        assert!(BaseUrl::default().link(&t).starts_with("https://www.grafiki.app/d#"));
        assert_eq!(BaseUrl::parse(DEFAULT_BASE_URL).unwrap(), BaseUrl::default());
    }

    #[test]
    fn rejects_unusable_base_urls() {
        for raw in [
            "",
            "   ",
            "///",
            "not a url",
            "ftp://host",
            "https://host?x=1",
            "https://host/#frag",
        ] {
            assert!(
                matches!(BaseUrl::parse(raw), Err(BridgeError::Configuration(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn keeps_explicit_port() {
        assert_eq!(
            BaseUrl::parse("http://localhost:5173/").unwrap().as_str(),
            "http://localhost:5173"
        );
    }
}
