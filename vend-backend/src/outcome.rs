//! Typed result of a vend call.

use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::StatusCode;
use vend_core::DomainErrorKind;

use crate::{BackendError, BackendResponse};

/// How the backend answered a vend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendOutcome {
    /// 2xx (or any non-error status); relayed as-is.
    Success {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },
    /// 4xx/5xx that carries no recognised domain marker.
    ClientError {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },
    /// 4xx/5xx whose body names a vend failure.
    DomainError(DomainErrorKind),
}

impl BackendOutcome {
    /// Fold the result of a raw exchange into an outcome.
    ///
    /// Status errors become [`BackendOutcome::DomainError`] when the body
    /// classifies, otherwise [`BackendOutcome::ClientError`]. Every other
    /// error is returned unchanged.
    ///
    /// # Errors
    /// Returns the original error for anything but [`BackendError::Status`].
    pub fn classify(result: Result<BackendResponse, BackendError>) -> Result<Self, BackendError> {
        match result {
            Ok(resp) => Ok(Self::Success {
                status: resp.status,
                content_type: resp.content_type().cloned(),
                body: resp.body,
            }),
            Err(BackendError::Status { status, content_type, body }) => {
                Ok(match DomainErrorKind::from_payload(&body) {
                    Some(kind) => Self::DomainError(kind),
                    None => Self::ClientError { status, content_type, body },
                })
            }
            Err(e) => Err(e),
        }
    }
}
