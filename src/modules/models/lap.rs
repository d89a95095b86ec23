use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::{Deserialize, Serialize};

use crate::modules::models::driver::Driver;
use crate::schema::laps;

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = laps)]
pub struct NewLap {
    pub id: String,
    pub driver_id: String,
    pub lap_time: f64,
    pub track: String,
}

/// `seq` is the store-assigned insertion counter; listing orders by it so
/// "insertion order" never depends on clock resolution.
#[derive(Queryable, Serialize, Associations, Identifiable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(belongs_to(Driver))]
#[diesel(primary_key(seq))]
pub struct Lap {
    pub seq: i64,
    pub id: String,
    pub driver_id: String,
    pub lap_time: f64,
    pub track: String,
}

impl Lap {
    /// # Insert a new lap into the database
    ///
    /// The foreign key on `driver_id` rejects laps for drivers that do not
    /// exist; callers check the driver first to turn that into a clean
    /// not-found.
    pub fn insert(conn: &mut SqliteConnection, new_lap: NewLap) -> QueryResult<Lap> {
        use crate::schema::laps::dsl::*;

        diesel::insert_into(laps).values(&new_lap).get_result(conn)
    }

    /// # Get a lap scoped to its claimed owner
    ///
    /// A single filtered query on both ids. A lap that exists under a
    /// different driver is indistinguishable from one that does not exist.
    pub fn get_scoped(
        conn: &mut SqliteConnection,
        id_in: &str,
        driver_id_in: &str,
    ) -> QueryResult<Lap> {
        use crate::schema::laps::dsl::*;

        laps.filter(id.eq(id_in))
            .filter(driver_id.eq(driver_id_in))
            .first(conn)
    }

    /// # Get all laps of a driver
    ///
    /// Returned in insertion order. The caller is responsible for checking
    /// the driver exists; an unknown driver simply yields no laps here.
    pub fn from_driver(conn: &mut SqliteConnection, driver_id_in: &str) -> QueryResult<Vec<Lap>> {
        use crate::schema::laps::dsl::*;

        laps.filter(driver_id.eq(driver_id_in))
            .order(seq.asc())
            .load::<Lap>(conn)
    }

    /// # Get all laps of a set of drivers in one query
    ///
    /// In insertion order, ready for `grouped_by`.
    pub fn from_drivers(conn: &mut SqliteConnection, drivers_in: &[Driver]) -> QueryResult<Vec<Lap>> {
        use crate::schema::laps::dsl::*;

        Lap::belonging_to(drivers_in)
            .order(seq.asc())
            .load::<Lap>(conn)
    }

    /// # Overwrite a lap's time and track
    ///
    /// Owner-scoped like [`Lap::get_scoped`]; `NotFound` when the id does
    /// not exist under this driver.
    pub fn update_scoped(
        conn: &mut SqliteConnection,
        id_in: &str,
        driver_id_in: &str,
        lap_time_in: f64,
        track_in: &str,
    ) -> QueryResult<Lap> {
        use crate::schema::laps::dsl::*;

        diesel::update(
            laps.filter(id.eq(id_in))
                .filter(driver_id.eq(driver_id_in)),
        )
        .set((lap_time.eq(lap_time_in), track.eq(track_in)))
        .get_result(conn)
    }

    /// # Delete a lap scoped to its claimed owner
    pub fn delete_scoped(
        conn: &mut SqliteConnection,
        id_in: &str,
        driver_id_in: &str,
    ) -> QueryResult<()> {
        use crate::schema::laps::dsl::*;

        let deleted = diesel::delete(
            laps.filter(id.eq(id_in))
                .filter(driver_id.eq(driver_id_in)),
        )
        .execute(conn)?;

        if deleted == 0 {
            return Err(diesel::result::Error::NotFound);
        }

        Ok(())
    }
}
