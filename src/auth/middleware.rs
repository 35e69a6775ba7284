//! Bearer token middleware

use super::issuer::TokenIssuer;
use crate::error::Error;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Middleware that requires a valid session token.
///
/// The token may be sent as either of:
/// ```text
/// Authorization: Bearer <token>
/// Authorization: <token>
/// ```
///
/// The request is passed through untouched; no claims are attached.
pub async fn require_bearer(
    State(issuer): State<Arc<TokenIssuer>>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| Error::unauthorized("non-ascii authorization header"))?,
        ),
        None => None,
    };

    if let Err(e) = issuer.verify(header) {
        tracing::debug!(error = %e, path = %request.uri().path(), "rejected bearer token");
        return Err(e);
    }

    Ok(next.run(request).await)
}
