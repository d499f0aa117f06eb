use rusqlite::ErrorCode;

use crate::database::PlayerId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of [`Error`], for callers that only care about the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, e.g. a player name that cannot be registered
    Validation,
    /// An id that does not correspond to a stored record
    Reference,
    /// The operation would break a tournament invariant
    Constraint,
    /// The store itself failed
    Store,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid player name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },
    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),
    #[error("player {0} cannot be recorded as playing against themself")]
    SelfMatch(PlayerId),
    #[error("cannot pair an odd number of players ({0}), byes are not supported")]
    OddPlayerCount(usize),
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
    #[error(transparent)]
    Pool(#[from] r2d2::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidName { .. } => ErrorKind::Validation,
            Error::UnknownPlayer(_) => ErrorKind::Reference,
            Error::SelfMatch(_) | Error::OddPlayerCount(_) => ErrorKind::Constraint,
            Error::Sql(rusqlite::Error::SqliteFailure(failure, _))
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                ErrorKind::Constraint
            }
            Error::Sql(_) | Error::Pool(_) => ErrorKind::Store,
        }
    }
}
