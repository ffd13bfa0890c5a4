pub(crate) mod models;

use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{Matching, Matchings, NewMatching};

#[post("/", data = "<matching>")]
pub(crate) async fn create_matching(
    matching: Payload<NewMatching>,
    conn: DbConn,
) -> Result<Json<Matching>, ErrorResponse> {
    api::create::<Matchings>(conn, matching.into_inner()).await
}

#[get("/<id>")]
pub(crate) async fn get_matching(id: i32, conn: DbConn) -> Result<Json<Matching>, ErrorResponse> {
    api::get::<Matchings>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_matchings(conn: DbConn) -> Result<Json<Vec<Matching>>, ErrorResponse> {
    api::list::<Matchings>(conn).await
}

#[put("/<id>", data = "<matching>")]
pub(crate) async fn update_matching(
    id: i32,
    matching: Payload<NewMatching>,
    conn: DbConn,
) -> Result<Json<Matching>, ErrorResponse> {
    api::update::<Matchings>(conn, id, matching.into_inner()).await
}

#[delete("/<id>")]
pub(crate) async fn delete_matching(
    id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<Matchings>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![
        create_matching,
        get_matching,
        get_matchings,
        update_matching,
        delete_matching
    ]
}
