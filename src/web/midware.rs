use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::web::{log, Error, REQUEST_ID_HEADER};

/// Turns a `web::Error` stashed in the response extensions into the client error body:
/// `{"detail": "...", "req_id": "..."}`. Every response gets logged.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    // Set by `PropagateRequestIdLayer`, which handles the response before this mapper does.
    let req_id = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| &**er);
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({
            "detail": cl_err.to_string(),
            "req_id": req_id.to_string(),
        });

        let mut err_resp = (*status, Json(client_error_body)).into_response();
        if let Ok(hv) = HeaderValue::from_str(&req_id.to_string()) {
            err_resp.headers_mut().insert(REQUEST_ID_HEADER, hv);
        }
        err_resp
    });

    log::log_request(
        req_id,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error,
    );

    err_resp.unwrap_or(resp)
}
