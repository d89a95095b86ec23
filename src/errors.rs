use std::error::Error;
use std::fmt;

use diesel::result::Error as DieselError;

/// Everything that can go wrong inside the data layer.
///
/// Exactly two domain errors exist: a driver id that does not resolve, and a
/// lap id that does not resolve under its claimed driver. Anything else is a
/// storage failure and is carried through unchanged.
#[derive(Debug)]
pub enum DataError {
    DriverNotFound { driver_id: String },
    LapNotFound { driver_id: String, lap_id: String },
    Database(DieselError),
}

impl DataError {
    /// Translate a storage error from a driver-scoped query.
    pub fn for_driver(error: DieselError, driver_id: &str) -> DataError {
        match error {
            DieselError::NotFound => DataError::DriverNotFound {
                driver_id: driver_id.to_string(),
            },
            other => DataError::Database(other),
        }
    }

    /// Translate a storage error from an owner-scoped lap query.
    pub fn for_lap(error: DieselError, driver_id: &str, lap_id: &str) -> DataError {
        match error {
            DieselError::NotFound => DataError::LapNotFound {
                driver_id: driver_id.to_string(),
                lap_id: lap_id.to_string(),
            },
            other => DataError::Database(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DataError::DriverNotFound { .. } | DataError::LapNotFound { .. }
        )
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::DriverNotFound { driver_id } => {
                write!(f, "driver {} not found", driver_id)
            }
            DataError::LapNotFound { driver_id, lap_id } => {
                write!(f, "lap {} not found for driver {}", lap_id, driver_id)
            }
            DataError::Database(error) => write!(f, "database error: {}", error),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataError::Database(error) => Some(error),
            _ => None,
        }
    }
}

impl From<DieselError> for DataError {
    fn from(error: DieselError) -> DataError {
        DataError::Database(error)
    }
}
