mod api;
mod db;
mod error;
mod payload;
mod repository;
mod schema;
mod settings;
mod trace;


#[macro_use]
extern crate rocket;

use anyhow::anyhow;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use tracing_subscriber::EnvFilter;

use db::DbConn;
use settings::Settings;
use trace::RequestTrace;

pub(crate) fn build_rocket(settings: Settings) -> Rocket<Build> {
    rocket::custom(db::figment(&settings))
        .attach(RequestTrace)
        .attach(DbConn::fairing())
        .attach(AdHoc::try_on_ignite(
            "Schema initialization",
            db::initialize_schema,
        ))
        .manage(settings)
        .mount("/", routes![api::index])
        .mount("/", api::table_management::routes())
        .mount("/users", api::user_management::routes())
        .mount("/consumers", api::consumer_management::routes())
        .mount("/suppliers", api::supplier_management::routes())
        .mount("/category_types", api::category_management::routes())
        .mount("/requested_food", api::requested_food_management::routes())
        .mount("/surplus_food", api::surplus_food_management::routes())
        .mount("/matching", api::matching_management::routes())
        .register("/", catchers![error::default_catcher])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;
    tracing::info!(
        pool_size = settings.pool_size,
        statement_timeout_ms = settings.statement_timeout_ms,
        destructive_admin = settings.allow_destructive_admin,
        "starting food share backend"
    );

    if let Err(err) = build_rocket(settings).launch().await {
        return Err(anyhow!("server failed: {}", err));
    }

    Ok(())
}
