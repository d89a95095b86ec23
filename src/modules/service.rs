//! The entity operations exposed to the request handlers.
//!
//! Identifier generation lives here; the model layer only ever sees ids that
//! already exist or have just been minted. Every function is one atomic unit
//! against the store, including the reads that compose a driver with its
//! laps.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use crate::errors::DataError;
use crate::modules::models::driver::{Driver, NewDriver};
use crate::modules::models::lap::{Lap, NewLap};

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/***** DRIVERS *****/

pub fn create_driver(conn: &mut SqliteConnection, name: &str) -> Result<Driver, DataError> {
    let new_driver = NewDriver {
        id: fresh_id(),
        name: name.to_string(),
    };

    Ok(Driver::insert(conn, new_driver)?)
}

/// All drivers, each paired with its laps in insertion order. One
/// transaction, so a concurrent cascade delete is either fully visible or
/// not at all.
pub fn list_drivers_with_laps(
    conn: &mut SqliteConnection,
) -> Result<Vec<(Driver, Vec<Lap>)>, DataError> {
    conn.transaction::<_, DataError, _>(|conn| {
        let drivers = Driver::get_all(conn)?;
        let laps = Lap::from_drivers(conn, &drivers)?.grouped_by(&drivers);
        Ok(drivers.into_iter().zip(laps).collect())
    })
}

/// One driver with its laps, read in one transaction.
pub fn get_driver_with_laps(
    conn: &mut SqliteConnection,
    driver_id: &str,
) -> Result<(Driver, Vec<Lap>), DataError> {
    conn.transaction::<_, DataError, _>(|conn| {
        let driver =
            Driver::get_by_id(conn, driver_id).map_err(|e| DataError::for_driver(e, driver_id))?;
        let laps = Lap::from_driver(conn, driver_id)?;
        Ok((driver, laps))
    })
}

/// Rename a driver. The mutation and the lap read backing the response
/// happen in the same transaction; a driver that vanishes mid-request
/// reports not-found without leaving a committed rename behind.
pub fn update_driver(
    conn: &mut SqliteConnection,
    driver_id: &str,
    name: &str,
) -> Result<(Driver, Vec<Lap>), DataError> {
    conn.transaction::<_, DataError, _>(|conn| {
        let driver = Driver::update_name(conn, driver_id, name)
            .map_err(|e| DataError::for_driver(e, driver_id))?;
        let laps = Lap::from_driver(conn, driver_id)?;
        Ok((driver, laps))
    })
}

pub fn delete_driver(conn: &mut SqliteConnection, driver_id: &str) -> Result<(), DataError> {
    Driver::delete_cascading(conn, driver_id).map_err(|e| DataError::for_driver(e, driver_id))
}

/***** LAPS *****/

/// Record a lap under an existing driver. The existence check and the insert
/// run in one transaction so the owner cannot vanish in between.
pub fn create_lap(
    conn: &mut SqliteConnection,
    driver_id: &str,
    lap_time: f64,
    track: &str,
) -> Result<Lap, DataError> {
    conn.transaction::<Lap, DataError, _>(|conn| {
        if !Driver::exists(conn, driver_id)? {
            return Err(DataError::DriverNotFound {
                driver_id: driver_id.to_string(),
            });
        }

        let new_lap = NewLap {
            id: fresh_id(),
            driver_id: driver_id.to_string(),
            lap_time,
            track: track.to_string(),
        };

        Ok(Lap::insert(conn, new_lap)?)
    })
}

pub fn list_laps(conn: &mut SqliteConnection, driver_id: &str) -> Result<Vec<Lap>, DataError> {
    conn.transaction::<_, DataError, _>(|conn| {
        if !Driver::exists(conn, driver_id)? {
            return Err(DataError::DriverNotFound {
                driver_id: driver_id.to_string(),
            });
        }

        Ok(Lap::from_driver(conn, driver_id)?)
    })
}

pub fn get_lap(
    conn: &mut SqliteConnection,
    driver_id: &str,
    lap_id: &str,
) -> Result<Lap, DataError> {
    Lap::get_scoped(conn, lap_id, driver_id).map_err(|e| DataError::for_lap(e, driver_id, lap_id))
}

pub fn update_lap(
    conn: &mut SqliteConnection,
    driver_id: &str,
    lap_id: &str,
    lap_time: f64,
    track: &str,
) -> Result<Lap, DataError> {
    Lap::update_scoped(conn, lap_id, driver_id, lap_time, track)
        .map_err(|e| DataError::for_lap(e, driver_id, lap_id))
}

pub fn delete_lap(
    conn: &mut SqliteConnection,
    driver_id: &str,
    lap_id: &str,
) -> Result<(), DataError> {
    Lap::delete_scoped(conn, lap_id, driver_id)
        .map_err(|e| DataError::for_lap(e, driver_id, lap_id))
}
