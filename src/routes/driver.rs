// rocket imports
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};
// database imports
use crate::modules::models::driver::Driver;
use crate::modules::models::general::establish_connection;
use crate::modules::models::lap::Lap;
use crate::modules::service;
// helper imports
use crate::macros::database_error_handeler::db_handle_error_http;
use crate::routes::lap::ApiLap;
use log::error;
use serde::{Deserialize, Serialize};

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

#[post("/drivers", data = "<driver>")]
pub fn create(driver: Json<DriverForm>) -> Result<Json<ApiDriver>, Status> {
    if driver.name.trim().is_empty() {
        return Err(Status::BadRequest);
    }

    let conn = &mut establish_connection();
    let created = db_handle_error_http!(
        service::create_driver(conn, &driver.name),
        "routes/driver:create",
        "driver"
    );

    Ok(Json(ApiDriver::new(&created, &[])))
}

#[get("/drivers")]
pub fn list() -> Result<Json<Vec<ApiDriver>>, Status> {
    let conn = &mut establish_connection();
    let drivers = db_handle_error_http!(
        service::list_drivers_with_laps(conn),
        "routes/driver:list",
        "drivers"
    );

    Ok(Json(
        drivers
            .iter()
            .map(|(driver, laps)| ApiDriver::new(driver, laps))
            .collect(),
    ))
}

#[get("/drivers/<driver_id>")]
pub fn single(driver_id: String) -> Result<Json<ApiDriver>, Status> {
    let conn = &mut establish_connection();
    let (driver, laps) = db_handle_error_http!(
        service::get_driver_with_laps(conn, &driver_id),
        "routes/driver:single",
        "driver"
    );

    Ok(Json(ApiDriver::new(&driver, &laps)))
}

#[put("/drivers/<driver_id>", data = "<driver>")]
pub fn update(driver_id: String, driver: Json<DriverForm>) -> Result<Json<ApiDriver>, Status> {
    if driver.name.trim().is_empty() {
        return Err(Status::BadRequest);
    }

    let conn = &mut establish_connection();
    let (updated, laps) = db_handle_error_http!(
        service::update_driver(conn, &driver_id, &driver.name),
        "routes/driver:update",
        "driver"
    );

    Ok(Json(ApiDriver::new(&updated, &laps)))
}

#[delete("/drivers/<driver_id>")]
pub fn delete(driver_id: String) -> Result<Json<Confirmation>, Status> {
    let conn = &mut establish_connection();
    db_handle_error_http!(
        service::delete_driver(conn, &driver_id),
        "routes/driver:delete",
        "driver"
    );

    Ok(Json(Confirmation {
        detail: String::from("Driver deleted"),
    }))
}

/**************************************************************************************************/
/**************** RESPONSE SHAPES *****************************************************************/
/**************************************************************************************************/

#[derive(Deserialize)]
pub struct DriverForm {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiDriver {
    pub id: String,
    pub name: String,
    pub laps: Vec<ApiLap>,
}

impl ApiDriver {
    pub fn new(driver: &Driver, laps: &[Lap]) -> ApiDriver {
        ApiDriver {
            id: driver.id.clone(),
            name: driver.name.clone(),
            laps: laps.iter().map(ApiLap::new).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Confirmation {
    pub detail: String,
}
