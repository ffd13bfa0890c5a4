pub(crate) mod models;

use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{NewUser, User, Users};

#[post("/", data = "<user>")]
pub(crate) async fn create_user(
    user: Payload<NewUser>,
    conn: DbConn,
) -> Result<Json<User>, ErrorResponse> {
    api::create::<Users>(conn, user.into_inner()).await
}

#[get("/<id>")]
pub(crate) async fn get_user(id: i32, conn: DbConn) -> Result<Json<User>, ErrorResponse> {
    api::get::<Users>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_users(conn: DbConn) -> Result<Json<Vec<User>>, ErrorResponse> {
    api::list::<Users>(conn).await
}

#[put("/<id>", data = "<user>")]
pub(crate) async fn update_user(
    id: i32,
    user: Payload<NewUser>,
    conn: DbConn,
) -> Result<Json<User>, ErrorResponse> {
    api::update::<Users>(conn, id, user.into_inner()).await
}

#[delete("/<id>")]
pub(crate) async fn delete_user(id: i32, conn: DbConn) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<Users>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![create_user, get_user, get_users, update_user, delete_user]
}
