// rocket imports
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};
// database imports
use crate::modules::models::general::establish_connection;
use crate::modules::models::lap::Lap;
use crate::modules::service;
// helper imports
use crate::macros::database_error_handeler::db_handle_error_http;
use crate::routes::driver::Confirmation;
use log::error;
use serde::{Deserialize, Serialize};

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

#[post("/drivers/<driver_id>/laps", data = "<lap>")]
pub fn create(driver_id: String, lap: Json<LapForm>) -> Result<Json<ApiLap>, Status> {
    if !lap_form_is_valid(&lap) {
        return Err(Status::BadRequest);
    }

    let conn = &mut establish_connection();
    let created = db_handle_error_http!(
        service::create_lap(conn, &driver_id, lap.lap_time, &lap.track),
        "routes/lap:create",
        "lap"
    );

    Ok(Json(ApiLap::new(&created)))
}

#[get("/drivers/<driver_id>/laps")]
pub fn list(driver_id: String) -> Result<Json<Vec<ApiLap>>, Status> {
    let conn = &mut establish_connection();
    let laps = db_handle_error_http!(
        service::list_laps(conn, &driver_id),
        "routes/lap:list",
        "laps"
    );

    Ok(Json(laps.iter().map(ApiLap::new).collect()))
}

#[get("/drivers/<driver_id>/laps/<lap_id>")]
pub fn single(driver_id: String, lap_id: String) -> Result<Json<ApiLap>, Status> {
    let conn = &mut establish_connection();
    let lap = db_handle_error_http!(
        service::get_lap(conn, &driver_id, &lap_id),
        "routes/lap:single",
        "lap"
    );

    Ok(Json(ApiLap::new(&lap)))
}

#[put("/drivers/<driver_id>/laps/<lap_id>", data = "<lap>")]
pub fn update(
    driver_id: String,
    lap_id: String,
    lap: Json<LapForm>,
) -> Result<Json<ApiLap>, Status> {
    if !lap_form_is_valid(&lap) {
        return Err(Status::BadRequest);
    }

    let conn = &mut establish_connection();
    let updated = db_handle_error_http!(
        service::update_lap(conn, &driver_id, &lap_id, lap.lap_time, &lap.track),
        "routes/lap:update",
        "lap"
    );

    Ok(Json(ApiLap::new(&updated)))
}

#[delete("/drivers/<driver_id>/laps/<lap_id>")]
pub fn delete(driver_id: String, lap_id: String) -> Result<Json<Confirmation>, Status> {
    let conn = &mut establish_connection();
    db_handle_error_http!(
        service::delete_lap(conn, &driver_id, &lap_id),
        "routes/lap:delete",
        "lap"
    );

    Ok(Json(Confirmation {
        detail: String::from("Lap deleted"),
    }))
}

// a lap time has to be a time value, the store does not bound it further
fn lap_form_is_valid(lap: &LapForm) -> bool {
    lap.lap_time.is_finite() && lap.lap_time > 0.0 && !lap.track.trim().is_empty()
}

/**************************************************************************************************/
/**************** RESPONSE SHAPES *****************************************************************/
/**************************************************************************************************/

#[derive(Deserialize)]
pub struct LapForm {
    pub lap_time: f64,
    pub track: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiLap {
    pub id: String,
    pub lap_time: f64,
    pub track: String,
}

impl ApiLap {
    pub fn new(lap: &Lap) -> ApiLap {
        ApiLap {
            id: lap.id.clone(),
            lap_time: lap.lap_time,
            track: lap.track.clone(),
        }
    }
}
