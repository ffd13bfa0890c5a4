use rocket::http::Status;
use rocket::serde::json::Json;
use tracing::warn;

use crate::api::table_management::admin::DestructiveAdmin;
use crate::api::table_management::models::{TableName, UnknownTable};
use crate::api::Message;
use crate::db::DbConn;
use crate::error::{ApiError, ErrorResponse};

#[delete("/clear_table/<table>")]
pub(crate) async fn clear_table(
    _admin: DestructiveAdmin,
    table: Result<TableName, UnknownTable>,
    conn: DbConn,
) -> Result<Json<Message>, ErrorResponse> {
    let table = table.map_err(|err| {
        warn!(table = %err.0, "refusing to clear unknown table");
        ErrorResponse::new(Status::BadRequest, ApiError::new(err.to_string()))
    })?;

    let deleted = conn.run(move |c| table.clear(c)).await?;
    warn!(%table, deleted, "table cleared");

    Ok(Message::new(format!("Table {} cleared", table)))
}
