use rocket::http::Status;
use rocket::outcome::try_outcome;
use rocket::request::{self, FromRequest, Outcome};
use rocket::{Request, State};
use tracing::warn;

use crate::error::{reject, ApiError};
use crate::settings::Settings;

/// Passes only when destructive administration is enabled.
pub(crate) struct DestructiveAdmin;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for DestructiveAdmin {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let settings = try_outcome!(req.guard::<&State<Settings>>().await.map_error(|_| {
            reject(
                req,
                Status::InternalServerError,
                ApiError::new("Couldn't get settings"),
            )
        }));

        if settings.allow_destructive_admin {
            Outcome::Success(DestructiveAdmin)
        } else {
            warn!(uri = %req.uri(), "destructive admin request refused");
            Outcome::Error(reject(
                req,
                Status::Forbidden,
                ApiError::new("destructive administration is disabled"),
            ))
        }
    }
}
