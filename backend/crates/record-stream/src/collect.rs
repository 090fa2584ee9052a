//! Draining adapters for async streams and blocking iterators.

use std::pin::pin;

use futures_util::stream::{Stream, StreamExt};

use crate::error::{MalformedRecord, TransformError};

/// Accumulates projected values while a source is drained.
struct Projection<F, U> {
    project: F,
    projected: Vec<U>,
}

impl<F, U> Projection<F, U> {
    const fn new(project: F) -> Self {
        Self {
            project,
            projected: Vec::new(),
        }
    }

    fn accept<T, E>(&mut self, item: Result<T, E>) -> Result<(), TransformError<E>>
    where
        F: FnMut(T) -> Result<U, MalformedRecord>,
    {
        let position = self.projected.len();
        let record = item.map_err(|source| TransformError::Source {
            consumed: position,
            source,
        })?;
        let value = (self.project)(record).map_err(|err| TransformError::Malformed {
            position,
            attribute: err.attribute,
        })?;
        self.projected.push(value);
        Ok(())
    }

    fn finish(self) -> Vec<U> {
        self.projected
    }
}

/// Drain `source`, projecting every record in source order.
///
/// Only one source record is held at a time. The first source failure or
/// rejected record aborts the drain and drops everything projected so far.
///
/// # Errors
///
/// Returns [`TransformError::Source`] when the stream yields an error and
/// [`TransformError::Malformed`] when `project` rejects a record.
///
/// # Examples
///
/// ```
/// use futures_util::stream;
/// use record_stream::{MalformedRecord, TransformError, collect_projected};
///
/// # futures_util::future::FutureExt::now_or_never(async {
/// let rows = stream::iter(vec![Ok::<_, &str>(1), Ok(2), Ok(3)]);
/// let doubled = collect_projected(rows, |n: i32| Ok::<_, MalformedRecord>(n * 2)).await;
/// assert_eq!(doubled.ok(), Some(vec![2, 4, 6]));
/// # });
/// ```
pub async fn collect_projected<S, T, U, E, F>(source: S, project: F) -> Result<Vec<U>, TransformError<E>>
where
    S: Stream<Item = Result<T, E>>,
    F: FnMut(T) -> Result<U, MalformedRecord>,
{
    let mut cursor = pin!(source);
    let mut projection = Projection::new(project);
    while let Some(item) = cursor.next().await {
        projection.accept(item)?;
    }
    Ok(projection.finish())
}

/// Blocking counterpart of [`collect_projected`] for iterator sources.
///
/// # Errors
///
/// Returns [`TransformError::Source`] when the iterator yields an error and
/// [`TransformError::Malformed`] when `project` rejects a record.
pub fn collect_projected_iter<I, T, U, E, F>(source: I, project: F) -> Result<Vec<U>, TransformError<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(T) -> Result<U, MalformedRecord>,
{
    let mut projection = Projection::new(project);
    for item in source {
        projection.accept(item)?;
    }
    Ok(projection.finish())
}
