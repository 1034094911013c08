use thiserror::Error;

/// Everything that can go wrong on the page. None of these are fatal once the
/// app is mounted: each one is logged and the affected widget degrades to an
/// inert state.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to load {src}: {reason}")]
    ResourceLoad { src: String, reason: String },

    #[error("no section named `{0}`")]
    MissingTarget(String),

    #[error("{0} is not available in this browser")]
    EnvironmentUnsupported(&'static str),

    #[error("content table is malformed: {0}")]
    Content(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SiteError::MissingTarget("foobar".to_string());
        assert_eq!(err.to_string(), "no section named `foobar`");

        let err = SiteError::ResourceLoad {
            src: "/assets/Financial.jpeg".to_string(),
            reason: "HTTP 404".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load /assets/Financial.jpeg: HTTP 404");
    }
}
