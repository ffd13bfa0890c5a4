use diesel::PgConnection;
use serde::Serialize;

use crate::error::StoreError;

pub(crate) type StoreResult<T> = Result<T, StoreError>;

/// CRUD over exactly one table. Every operation is a single auto-committed
/// statement on the connection it is handed.
pub(crate) trait Repository: 'static {
    const ENTITY: &'static str;

    type Record: Serialize + Send + 'static;
    type New: Send + 'static;

    fn record_id(record: &Self::Record) -> i32;

    fn create(c: &mut PgConnection, new: &Self::New) -> StoreResult<Self::Record>;

    fn get(c: &mut PgConnection, id: i32) -> StoreResult<Self::Record>;

    /// Whole table, in whatever order the database returns it.
    fn list(c: &mut PgConnection) -> StoreResult<Vec<Self::Record>>;

    /// Replaces every non-id column. Fails with `NotFound` when `id` is absent.
    fn update(c: &mut PgConnection, id: i32, new: &Self::New) -> StoreResult<Self::Record>;

    /// Fails with `NotFound` when `id` is absent.
    fn delete(c: &mut PgConnection, id: i32) -> StoreResult<()>;
}

/// Implements [`Repository`] for one Diesel table whose record type is
/// `Queryable` in column order and whose new type is both `Insertable` and
/// `AsChangeset`.
macro_rules! diesel_repository {
    ($repo:ident, $table:ident, $record:ty, $new:ty, $entity:literal) => {
        pub(crate) struct $repo;

        impl $crate::repository::Repository for $repo {
            const ENTITY: &'static str = $entity;

            type Record = $record;
            type New = $new;

            fn record_id(record: &$record) -> i32 {
                record.id
            }

            fn create(
                c: &mut ::diesel::PgConnection,
                new: &$new,
            ) -> $crate::repository::StoreResult<$record> {
                use ::diesel::prelude::*;

                ::diesel::insert_into($crate::schema::$table::table)
                    .values(new)
                    .get_result(c)
                    .map_err(|err| $crate::error::StoreError::from_diesel($entity, err))
            }

            fn get(
                c: &mut ::diesel::PgConnection,
                id: i32,
            ) -> $crate::repository::StoreResult<$record> {
                use ::diesel::prelude::*;

                $crate::schema::$table::table
                    .find(id)
                    .first(c)
                    .map_err(|err| $crate::error::StoreError::from_diesel($entity, err))
            }

            fn list(
                c: &mut ::diesel::PgConnection,
            ) -> $crate::repository::StoreResult<Vec<$record>> {
                use ::diesel::prelude::*;

                $crate::schema::$table::table
                    .load(c)
                    .map_err(|err| $crate::error::StoreError::from_diesel($entity, err))
            }

            fn update(
                c: &mut ::diesel::PgConnection,
                id: i32,
                new: &$new,
            ) -> $crate::repository::StoreResult<$record> {
                use ::diesel::prelude::*;

                ::diesel::update($crate::schema::$table::table.find(id))
                    .set(new)
                    .get_result(c)
                    .map_err(|err| $crate::error::StoreError::from_diesel($entity, err))
            }

            fn delete(c: &mut ::diesel::PgConnection, id: i32) -> $crate::repository::StoreResult<()> {
                use ::diesel::prelude::*;

                let deleted = ::diesel::delete($crate::schema::$table::table.find(id))
                    .execute(c)
                    .map_err(|err| $crate::error::StoreError::from_diesel($entity, err))?;

                if deleted == 0 {
                    return Err($crate::error::StoreError::NotFound { entity: $entity });
                }

                Ok(())
            }
        }
    };
}

pub(crate) use diesel_repository;
