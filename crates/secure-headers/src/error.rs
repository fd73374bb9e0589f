use http::header::InvalidHeaderValue;

/// Error returned when a configured string cannot be used as a header value.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("invalid value for {header} header: {source}")]
    InvalidValue {
        header: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },
}
