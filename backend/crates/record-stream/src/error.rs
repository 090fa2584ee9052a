//! Failure types raised while draining a record source.

use thiserror::Error;

/// A record handed to a projection lacked an attribute the projection needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record is missing required attribute `{attribute}`")]
pub struct MalformedRecord {
    /// Name of the missing attribute.
    pub attribute: &'static str,
}

impl MalformedRecord {
    /// Report `attribute` as missing.
    #[must_use]
    pub const fn missing(attribute: &'static str) -> Self {
        Self { attribute }
    }
}

/// Terminal failure while projecting a record source.
///
/// Both variants discard whatever had been projected before the failure.
#[derive(Debug, Error)]
pub enum TransformError<E> {
    /// The source itself failed, for example because its connection dropped.
    #[error("record source failed after {consumed} records: {source}")]
    Source {
        /// Records successfully projected before the failure.
        consumed: usize,
        /// Failure reported by the source.
        #[source]
        source: E,
    },
    /// The projection rejected a record.
    #[error("record {position} is missing required attribute `{attribute}`")]
    Malformed {
        /// Zero-based position of the rejected record in the source.
        position: usize,
        /// Name of the missing attribute.
        attribute: &'static str,
    },
}

impl<E> TransformError<E> {
    /// Number of records that had been projected before the failure.
    ///
    /// For [`TransformError::Malformed`] this is the position of the rejected
    /// record, since every record before it was projected.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        match self {
            Self::Source { consumed, .. } => *consumed,
            Self::Malformed { position, .. } => *position,
        }
    }

    /// Apply `map` to the source failure, leaving malformed records untouched.
    pub fn map_source<F, O>(self, map: O) -> TransformError<F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Source { consumed, source } => TransformError::Source {
                consumed,
                source: map(source),
            },
            Self::Malformed {
                position,
                attribute,
            } => TransformError::Malformed {
                position,
                attribute,
            },
        }
    }
}
