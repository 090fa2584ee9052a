//! Failure payload shared by the domain and its inbound adapters.
//!
//! An [`Error`] says what went wrong in a form safe to show a client: a
//! category, a fixed message, the trace id of the request that hit it and
//! optional structured details. Adapters choose the transport status from the
//! category alone.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Failure category, serialised in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    /// The record store could not be reached or dropped the connection.
    ServiceUnavailable,
    /// The record store or a stored record is unusable.
    InternalError,
}

/// Domain error payload, serialised as
/// `{"code","message","traceId"?,"details"?}`.
///
/// Building an error inside a traced request captures that request's
/// [`TraceId`].
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::service_unavailable("store offline");
/// assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
/// assert_eq!(err.to_string(), "store offline");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct Error {
    #[schema(example = "service_unavailable")]
    code: ErrorCode,
    #[schema(example = "user records are temporarily unavailable")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the captured trace id, e.g. when the error crossed a task
    /// boundary the task-local did not follow.
    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        Self {
            trace_id: Some(id.into()),
            ..self
        }
    }

    /// Attach structured context such as the record set and scan position.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::internal("a user record is incomplete")
    ///     .with_details(json!({ "position": 3, "attribute": "email" }));
    /// assert_eq!(err.details().and_then(|d| d.get("position")), Some(&json!(3)));
    /// ```
    pub fn with_details(self, details: Value) -> Self {
        Self {
            details: Some(details),
            ..self
        }
    }

    /// Copy of the error fit for a client: internal errors lose their details.
    pub fn for_client(&self) -> Self {
        match self.code {
            ErrorCode::InternalError => Self {
                details: None,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}
