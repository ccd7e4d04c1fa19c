use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApproximationError>;

#[derive(Error, Debug)]
pub enum ApproximationError {
    /// Input outside the mathematically valid domain of `arcsin` or
    /// `arccos`.
    #[error("{function}: input should be in the range [-1, 1], got {input}")]
    Domain {
        function: &'static str,
        input: f64,
    },

    /// First failing element of an element-wise application. The index
    /// is the linear position in iteration order; no partial result
    /// was produced.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ApproximationError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
}
