pub(crate) mod category_management;
pub(crate) mod consumer_management;
pub(crate) mod matching_management;
pub(crate) mod requested_food_management;
pub(crate) mod supplier_management;
pub(crate) mod surplus_food_management;
pub(crate) mod table_management;
pub(crate) mod user_management;

use rocket::serde::json::Json;
use serde::Serialize;
use tracing::info;

use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::repository::Repository;

#[derive(Serialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub(crate) fn new(message: impl Into<String>) -> Json<Message> {
        Json(Message {
            message: message.into(),
        })
    }
}

#[get("/")]
pub(crate) fn index() -> &'static str {
    "food share backend"
}

// Shared handler bodies. Each takes one connection checkout for the
// duration of a single repository call.

pub(crate) async fn create<R: Repository>(
    conn: DbConn,
    new: R::New,
) -> Result<Json<R::Record>, ErrorResponse> {
    let record = conn.run(move |c| R::create(c, &new)).await?;
    info!(entity = R::ENTITY, id = R::record_id(&record), "created");

    Ok(Json(record))
}

pub(crate) async fn get<R: Repository>(
    conn: DbConn,
    id: i32,
) -> Result<Json<R::Record>, ErrorResponse> {
    let record = conn.run(move |c| R::get(c, id)).await?;

    Ok(Json(record))
}

pub(crate) async fn list<R: Repository>(conn: DbConn) -> Result<Json<Vec<R::Record>>, ErrorResponse> {
    let records = conn.run(|c| R::list(c)).await?;

    Ok(Json(records))
}

pub(crate) async fn update<R: Repository>(
    conn: DbConn,
    id: i32,
    new: R::New,
) -> Result<Json<R::Record>, ErrorResponse> {
    let record = conn.run(move |c| R::update(c, id, &new)).await?;
    info!(entity = R::ENTITY, id, "updated");

    Ok(Json(record))
}

pub(crate) async fn delete<R: Repository>(
    conn: DbConn,
    id: i32,
) -> Result<Json<Message>, ErrorResponse> {
    conn.run(move |c| R::delete(c, id)).await?;
    info!(entity = R::ENTITY, id, "deleted");

    Ok(Message::new(format!("{} deleted", R::ENTITY)))
}
