//! Human-readable JSON responses.
//!
//! Bodies are indented by two spaces and end with a newline, e.g.
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "location": "NYC",
//!     "name": "PyConf"
//!   }
//! ]
//! ```
//!
//! Keys are emitted in struct field order; response structs declare their
//! fields alphabetically.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Like `axum::Json`, but pretty-printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(mut body) => {
                body.push(b'\n');
                (
                    [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                    body,
                )
                    .into_response()
            }
            Err(e) => {
                error!(error = %e, "response serialisation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                    "{\"error\": \"internal server error\"}\n",
                )
                    .into_response()
            }
        }
    }
}
