use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiError {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl ApiError {
    pub(crate) fn new(detail: impl Into<String>) -> ApiError {
        ApiError {
            detail: detail.into(),
            entity: None,
            errors: Vec::new(),
        }
    }

    pub(crate) fn for_entity(entity: &'static str, detail: impl Into<String>) -> ApiError {
        ApiError {
            entity: Some(entity),
            ..ApiError::new(detail)
        }
    }

    pub(crate) fn with_errors(mut self, errors: Vec<FieldError>) -> ApiError {
        self.errors = errors;
        self
    }
}

#[derive(Debug)]
pub(crate) struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, err: ApiError) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(err),
            status,
        }
    }
}

impl<'r, T: serde::Serialize> Responder<'r, 'r> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request) -> response::Result<'r> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

/// Failure of a single repository operation.
#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("{entity} violates a database constraint: {reason}")]
    ConstraintViolation {
        entity: &'static str,
        reason: &'static str,
    },
    #[error("database unavailable")]
    Unavailable { entity: &'static str },
    #[error("database error")]
    Database { entity: &'static str },
}

impl StoreError {
    /// Classifies a Diesel failure. The driver message is logged here and
    /// never carried into the response.
    pub(crate) fn from_diesel(entity: &'static str, err: DieselError) -> StoreError {
        match err {
            DieselError::NotFound => StoreError::NotFound { entity },
            DieselError::DatabaseError(kind, info) => {
                warn!(entity, ?kind, message = info.message(), "database operation failed");

                let reason = match kind {
                    DatabaseErrorKind::ForeignKeyViolation => "referenced record does not exist",
                    DatabaseErrorKind::UniqueViolation => "duplicate value",
                    DatabaseErrorKind::CheckViolation => "value out of range",
                    DatabaseErrorKind::NotNullViolation => "required value missing",
                    DatabaseErrorKind::ClosedConnection => {
                        return StoreError::Unavailable { entity }
                    }
                    _ => return StoreError::Database { entity },
                };

                StoreError::ConstraintViolation { entity, reason }
            }
            other => {
                error!(entity, error = %other, "database operation failed");
                StoreError::Database { entity }
            }
        }
    }

    pub(crate) fn status(&self) -> Status {
        match self {
            StoreError::NotFound { .. } => Status::NotFound,
            StoreError::ConstraintViolation { .. } => Status::Conflict,
            StoreError::Unavailable { .. } => Status::ServiceUnavailable,
            StoreError::Database { .. } => Status::InternalServerError,
        }
    }

    fn entity(&self) -> &'static str {
        match self {
            StoreError::NotFound { entity }
            | StoreError::ConstraintViolation { entity, .. }
            | StoreError::Unavailable { entity }
            | StoreError::Database { entity } => entity,
        }
    }
}

impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        ErrorResponse::new(err.status(), ApiError::for_entity(err.entity(), err.to_string()))
    }
}

/// Detail of a guard rejection, kept in the request-local cache so the
/// catcher can render it. Rocket does not hand guard errors to catchers.
struct Rejection(Option<ApiError>);

pub(crate) fn reject(req: &Request<'_>, status: Status, err: ApiError) -> (Status, ApiError) {
    req.local_cache(|| Rejection(Some(err.clone())));
    (status, err)
}

#[catch(default)]
pub(crate) fn default_catcher(status: Status, req: &Request) -> ErrorResponse {
    let err = req
        .local_cache(|| Rejection(None))
        .0
        .clone()
        .unwrap_or_else(|| ApiError::new(status.reason_lossy()));

    ErrorResponse::new(status, err)
}
