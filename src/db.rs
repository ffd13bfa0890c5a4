use diesel::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::fairing;
use rocket::figment::util::map;
use rocket::figment::value::{Map, Value};
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use rocket_sync_db_pools::database;
use tracing::{error, info};

use crate::settings::Settings;

pub(crate) const DATABASE_NAME: &str = "food_share";

/// Per-request checkout from the process-wide pool. The pool itself is built
/// once by `DbConn::fairing()` while Rocket ignites, before any listener is
/// bound.
#[database("food_share")]
pub(crate) struct DbConn(diesel::PgConnection);

pub(crate) const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Rocket figment with the pool configuration for [`DbConn`] merged in.
pub(crate) fn figment(settings: &Settings) -> Figment {
    let db: Map<_, Value> = map! {
        "url" => settings.connection_url().into(),
        "pool_size" => settings.pool_size.into(),
        "timeout" => settings.pool_timeout_secs.into()
    };

    rocket::Config::figment().merge(("databases", map![DATABASE_NAME => db]))
}

/// Creates any missing tables. Safe to run against an initialized schema.
pub(crate) async fn initialize_schema(rocket: Rocket<Build>) -> fairing::Result {
    let Some(conn) = DbConn::get_one(&rocket).await else {
        error!("no database connection available for schema initialization");
        return Err(rocket);
    };

    match conn.run(apply_schema).await {
        Ok(applied) => {
            info!(applied, "database schema ready");
            Ok(rocket)
        }
        Err(err) => {
            error!(%err, "couldn't initialize database schema");
            Err(rocket)
        }
    }
}

fn apply_schema(c: &mut PgConnection) -> Result<usize, String> {
    c.run_pending_migrations(MIGRATIONS)
        .map(|versions| versions.len())
        .map_err(|err| err.to_string())
}

/// Drops every table in reverse dependency order.
pub(crate) fn drop_schema(c: &mut PgConnection) -> Result<usize, String> {
    c.revert_all_migrations(MIGRATIONS)
        .map(|versions| versions.len())
        .map_err(|err| err.to_string())
}
