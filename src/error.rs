use thiserror::Error;

/// Everything that can abort a fetch cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected JSON from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("no response available for {0}")]
    NotFound(String),
}

impl FetchError {
    /// Attaches the request URL to a decode error that does not carry one yet.
    pub fn for_url(self, url: &str) -> Self {
        match self {
            FetchError::Decode { url: known, message } if known.is_empty() => FetchError::Decode {
                url: url.to_string(),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode {
            url: String::new(),
            message: err.to_string(),
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            // gloo-net's `Response::json` reports shape mismatches this way
            gloo_net::Error::SerdeError(err) => err.into(),
            other => FetchError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_error() -> serde_json::Error {
        serde_json::from_str::<Vec<u8>>("{\"forms\": 1}").unwrap_err()
    }

    #[test]
    fn serde_errors_become_decode_errors() {
        let err = FetchError::from(shape_error()).for_url("https://pokeapi.co/api/v2/pokemon/1/");
        assert!(matches!(
            err,
            FetchError::Decode { ref url, .. } if url == "https://pokeapi.co/api/v2/pokemon/1/"
        ));
    }

    #[test]
    fn gloo_serde_errors_are_not_network_errors() {
        let err: FetchError = gloo_net::Error::SerdeError(shape_error()).into();
        assert!(matches!(err, FetchError::Decode { .. }));

        let err: FetchError = gloo_net::Error::GlooError("connection reset".into()).into();
        assert_eq!(err, FetchError::Network("connection reset".into()));
    }

    #[test]
    fn for_url_keeps_existing_context() {
        let err = FetchError::Decode {
            url: "first".into(),
            message: "bad".into(),
        };
        assert_eq!(err.clone().for_url("second"), err);
        assert_eq!(
            FetchError::NotFound("a".into()).for_url("b"),
            FetchError::NotFound("a".into())
        );
    }
}
