use rocket::serde::json::Json;
use tracing::{error, warn};

use crate::api::table_management::admin::DestructiveAdmin;
use crate::api::Message;
use crate::db::{self, DbConn};
use crate::error::{ErrorResponse, StoreError};

/// Reverts the embedded migration. The next start recreates every table.
#[delete("/delete_tables")]
pub(crate) async fn delete_tables(
    _admin: DestructiveAdmin,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    let reverted = conn.run(db::drop_schema).await.map_err(|err| {
        error!(%err, "couldn't drop tables");
        ErrorResponse::from(StoreError::Database { entity: "Table" })
    })?;
    warn!(reverted, "all tables dropped");

    Ok(Message::new("Tables deleted"))
}
