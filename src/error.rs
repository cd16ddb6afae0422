use thiserror::Error;

/// Request-level failure conditions for a popularity check.
///
/// Item-level lookup failures are deliberately not part of this enum: a single
/// bad link must never abort a whole batch, so those are collected as
/// [`crate::fetch::FailedLookup`] records and surfaced only as an aggregate
/// count. Everything here terminates the current request before or after the
/// fetch loop.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A client credential is unset or empty. Fatal; checked before any
    /// other work happens.
    #[error("missing Spotify credential: {0} must be set")]
    MissingCredentials(String),

    /// More track links were pasted than the configured ceiling allows.
    /// Carries the actual count so the user knows how much to trim.
    #[error("{count} track links found, but the limit is {limit}")]
    TooManyTracks { count: usize, limit: usize },

    /// The input contained no recognizable track links at all.
    #[error("no Spotify track links found in the input")]
    NoTrackLinks,

    /// Every single lookup failed. Distinct from [`CheckError::NoTrackLinks`]:
    /// links were found, the provider just resolved none of them.
    #[error("none of the {attempted} track lookups succeeded")]
    NothingResolved { attempted: usize },
}
