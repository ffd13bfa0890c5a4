pub(crate) mod models;

use chrono::Utc;
use rocket::serde::json::Json;
use rocket::Route;

use crate::api::{self, Message};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::payload::Payload;

use models::{SurplusFood, SurplusFoodIn, SurplusFoods};

#[post("/", data = "<food>")]
pub(crate) async fn create_surplus_food(
    food: Payload<SurplusFoodIn>,
    conn: DbConn,
) -> Result<Json<SurplusFood>, ErrorResponse> {
    let new_food = food.into_inner().stamped(Utc::now());
    api::create::<SurplusFoods>(conn, new_food).await
}

#[get("/<id>")]
pub(crate) async fn get_surplus_food(
    id: i32,
    conn: DbConn,
) -> Result<Json<SurplusFood>, ErrorResponse> {
    api::get::<SurplusFoods>(conn, id).await
}

#[get("/")]
pub(crate) async fn get_all_surplus_food(
    conn: DbConn,
) -> Result<Json<Vec<SurplusFood>>, ErrorResponse> {
    api::list::<SurplusFoods>(conn).await
}

#[put("/<id>", data = "<food>")]
pub(crate) async fn update_surplus_food(
    id: i32,
    food: Payload<SurplusFoodIn>,
    conn: DbConn,
) -> Result<Json<SurplusFood>, ErrorResponse> {
    let new_food = food.into_inner().stamped(Utc::now());
    api::update::<SurplusFoods>(conn, id, new_food).await
}

#[delete("/<id>")]
pub(crate) async fn delete_surplus_food(
    id: i32,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    api::delete::<SurplusFoods>(conn, id).await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![
        create_surplus_food,
        get_surplus_food,
        get_all_surplus_food,
        update_surplus_food,
        delete_surplus_food
    ]
}
