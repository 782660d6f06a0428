use axum::http::StatusCode;

/// `GET /healthz`. Answers as long as the process is serving requests;
/// dependency checks belong in each service's readiness handler.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
