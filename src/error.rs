use thiserror::Error;

/// Presence checks on a submitted review.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("car number is required")]
    MissingCarNumber,

    #[error("review text is required")]
    MissingReview,
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid review: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Corrupt row {id}: {reason}")]
    CorruptRow { id: String, reason: String },
}

/// Failures seen by the browser when talking to `/api/reviews`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Network(#[from] gloo_net::Error),

    #[error("{0}")]
    Rejected(String),
}
