// Route exports
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};

use crate::error::RankerError;
use crate::models::ErrorResponse;

pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .configure(matches::configure),
    );
}

/// Missing source documents are 404s; everything else is a 500
impl ResponseError for RankerError {
    fn status_code(&self) -> StatusCode {
        if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let error = if self.is_not_found() { "not_found" } else { "internal_error" };
        HttpResponse::build(status).json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// JSON error for path segments that do not parse, e.g. a non-numeric employer id
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    let response = HttpResponse::NotFound().json(ErrorResponse {
        error: "not_found".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 404,
    });
    error::InternalError::from_response(err, response).into()
}
