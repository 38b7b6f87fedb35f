use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use linkhop_core::ShortCode;
use tracing::{debug, trace};

/// Redirects to the URL registered under the request path.
///
/// The raw `Uri` is used instead of a `Path` extractor so the code is never
/// percent-decoded.
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let code = ShortCode::from_path(uri.path())?;
    trace!(code = %code, "resolving short code");

    let Some(record) = state.registry().get(&code).await else {
        debug!(code = %code, "short code not found");
        return Err(AppError::NotFound);
    };

    let location = HeaderValue::from_str(&record.original_url)
        .map_err(|_| AppError::InvalidLocation(record.original_url.clone()))?;

    debug!(code = %code, url = %record.original_url, "redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
