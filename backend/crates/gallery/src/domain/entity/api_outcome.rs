//! API Outcome Entity
//!
//! Classification of a single upstream API response. Created per call and
//! consumed immediately by the dispatcher.

use axum::http::StatusCode;

/// Which success set applies to an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Reads: only `200 OK` is success
    Query,
    /// Writes: `200 OK`, `201 Created` and `204 No Content` are success
    Mutation,
}

impl EndpointKind {
    pub fn is_success(&self, status: StatusCode) -> bool {
        match self {
            EndpointKind::Query => status == StatusCode::OK,
            EndpointKind::Mutation => matches!(
                status,
                StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<P> {
    Success(P),
    /// 401 or 403; the payload is discarded
    AuthDenied,
    /// Any other status, with the upstream reason phrase
    Fatal { status: u16, reason: String },
}

impl<P> ApiOutcome<P> {
    /// Classify a response by status code.
    ///
    /// `reason` is the phrase the transport reported; when absent the
    /// canonical phrase for the status is used.
    pub fn classify(
        status: StatusCode,
        reason: Option<&str>,
        endpoint: EndpointKind,
        payload: P,
    ) -> Self {
        if endpoint.is_success(status) {
            return ApiOutcome::Success(payload);
        }
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return ApiOutcome::AuthDenied;
        }

        let reason = reason
            .map(str::to_string)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_default();
        ApiOutcome::Fatal {
            status: status.as_u16(),
            reason,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }
}
