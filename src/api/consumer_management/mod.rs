pub(crate) mod models;

use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{Consumer, Consumers, NewConsumer};

#[post("/", data = "<consumer>")]
pub(crate) async fn create_consumer(
    consumer: Payload<NewConsumer>,
    conn: DbConn,
) -> Result<Json<Consumer>, ErrorResponse> {
    api::create::<Consumers>(conn, consumer.into_inner()).await
}

#[get("/<id>")]
pub(crate) async fn get_consumer(id: i32, conn: DbConn) -> Result<Json<Consumer>, ErrorResponse> {
    api::get::<Consumers>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_consumers(conn: DbConn) -> Result<Json<Vec<Consumer>>, ErrorResponse> {
    api::list::<Consumers>(conn).await
}

#[put("/<id>", data = "<consumer>")]
pub(crate) async fn update_consumer(
    id: i32,
    consumer: Payload<NewConsumer>,
    conn: DbConn,
) -> Result<Json<Consumer>, ErrorResponse> {
    api::update::<Consumers>(conn, id, consumer.into_inner()).await
}

#[delete("/<id>")]
pub(crate) async fn delete_consumer(
    id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<Consumers>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![
        create_consumer,
        get_consumer,
        get_consumers,
        update_consumer,
        delete_consumer
    ]
}
