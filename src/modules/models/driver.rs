use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use diesel::sqlite::SqliteConnection;
use serde::{Deserialize, Serialize};

use crate::schema::drivers;
use crate::schema::laps;

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = drivers)]
pub struct NewDriver {
    pub id: String,
    pub name: String,
}

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
}

impl Driver {
    pub fn insert(conn: &mut SqliteConnection, new_driver: NewDriver) -> QueryResult<Driver> {
        diesel::insert_into(drivers::table)
            .values(&new_driver)
            .get_result(conn)
    }

    pub fn exists(conn: &mut SqliteConnection, id_in: &str) -> QueryResult<bool> {
        use crate::schema::drivers::dsl::*;
        select(exists(drivers.filter(id.eq(id_in)))).get_result(conn)
    }

    pub fn get_by_id(conn: &mut SqliteConnection, id_in: &str) -> QueryResult<Driver> {
        use crate::schema::drivers::dsl::*;
        drivers.filter(id.eq(id_in)).first::<Driver>(conn)
    }

    pub fn get_all(conn: &mut SqliteConnection) -> QueryResult<Vec<Driver>> {
        use crate::schema::drivers::dsl::*;
        drivers.load::<Driver>(conn)
    }

    pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
        use crate::schema::drivers::dsl::*;
        drivers.count().get_result(conn)
    }

    /// Overwrite the driver's name. `NotFound` when no row has this id.
    pub fn update_name(
        conn: &mut SqliteConnection,
        id_in: &str,
        name_in: &str,
    ) -> QueryResult<Driver> {
        use crate::schema::drivers::dsl::*;
        diesel::update(drivers.filter(id.eq(id_in)))
            .set(name.eq(name_in))
            .get_result(conn)
    }

    /// Remove the driver and every lap it owns in one transaction, so no
    /// half-deleted state is ever visible to a concurrent reader.
    pub fn delete_cascading(conn: &mut SqliteConnection, id_in: &str) -> QueryResult<()> {
        conn.transaction(|conn| {
            diesel::delete(laps::table.filter(laps::driver_id.eq(id_in))).execute(conn)?;

            let deleted =
                diesel::delete(drivers::table.filter(drivers::id.eq(id_in))).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            Ok(())
        })
    }
}
