use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use rocket::routes;

use laptimes_api::bootstrap::{run_migrations, seed_demo_data};
use laptimes_api::modules::models::general::establish_connection;
use laptimes_api::routes::driver::{ApiDriver, Confirmation};
use laptimes_api::routes::lap::ApiLap;
use laptimes_api::routes::{driver, lap};

static INIT: std::sync::Once = std::sync::Once::new();

/// Build a client over a private database file, migrated and seeded the same
/// way the server binary does it at startup. The file is prepared once per
/// test process; `DATABASE_URL` is process-wide state.
fn client() -> Client {
    INIT.call_once(|| {
        let db_path =
            std::env::temp_dir().join(format!("laptimes_api_test_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&db_path);
        std::env::set_var("DATABASE_URL", &db_path);

        let conn = &mut establish_connection();
        run_migrations(conn);
        seed_demo_data(conn).expect("Failed to seed demo data");
    });

    let rocket = rocket::build().mount(
        "/",
        routes![
            driver::create,
            driver::list,
            driver::single,
            driver::update,
            driver::delete,
            lap::create,
            lap::list,
            lap::single,
            lap::update,
            lap::delete,
        ],
    );

    Client::tracked(rocket).expect("valid rocket instance")
}

#[test]
fn full_http_round_trip() {
    let client = client();

    // the bootstrap seed is visible over the wire
    let response = client.get("/drivers").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let seeded: Vec<ApiDriver> = response.into_json().expect("driver list json");
    assert_eq!(seeded.len(), 1);
    assert_eq!(seeded[0].name, "Lewis Hamilton");
    assert_eq!(seeded[0].laps.len(), 2);
    let seeded_lap_id = seeded[0].laps[0].id.clone();

    // create a driver
    let response = client
        .post("/drivers")
        .header(ContentType::JSON)
        .body(serde_json::json!({"name": "Max Verstappen"}).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let max: ApiDriver = response.into_json().expect("driver json");
    assert_eq!(max.name, "Max Verstappen");
    assert!(max.laps.is_empty());
    assert!(!max.id.is_empty());

    // record a lap under it
    let response = client
        .post(format!("/drivers/{}/laps", max.id))
        .header(ContentType::JSON)
        .body(serde_json::json!({"lap_time": 78.1, "track": "Spa"}).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let spa_lap: ApiLap = response.into_json().expect("lap json");
    assert_eq!(spa_lap.lap_time, 78.1);
    assert_eq!(spa_lap.track, "Spa");

    // the lap shows up on the driver
    let response = client.get(format!("/drivers/{}", max.id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let fetched: ApiDriver = response.into_json().expect("driver json");
    assert_eq!(fetched.laps, vec![spa_lap.clone()]);

    // the full listing pairs every driver with exactly its own laps
    let response = client.get("/drivers").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let all: Vec<ApiDriver> = response.into_json().expect("driver list json");
    assert_eq!(all.len(), 2);
    let lewis = all.iter().find(|d| d.id == seeded[0].id).unwrap();
    let max_listed = all.iter().find(|d| d.id == max.id).unwrap();
    assert_eq!(lewis.laps.len(), 2);
    assert_eq!(max_listed.laps, vec![spa_lap.clone()]);

    // update the lap in place
    let response = client
        .put(format!("/drivers/{}/laps/{}", max.id, spa_lap.id))
        .header(ContentType::JSON)
        .body(r#"{"lap_time": 77.9, "track": "Spa"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated: ApiLap = response.into_json().expect("lap json");
    assert_eq!(updated.id, spa_lap.id);
    assert_eq!(updated.lap_time, 77.9);

    // the seeded driver cannot claim this lap
    let response = client
        .get(format!("/drivers/{}/laps/{}", seeded[0].id, spa_lap.id))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    // nor can this driver claim the seeded lap
    let response = client
        .get(format!("/drivers/{}/laps/{}", max.id, seeded_lap_id))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    // rename the driver
    let response = client
        .put(format!("/drivers/{}", max.id))
        .header(ContentType::JSON)
        .body(r#"{"name": "M. Verstappen"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let renamed: ApiDriver = response.into_json().expect("driver json");
    assert_eq!(renamed.name, "M. Verstappen");
    assert_eq!(renamed.laps.len(), 1);

    // delete the driver, laps go with it
    let response = client.delete(format!("/drivers/{}", max.id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let confirmation: Confirmation = response.into_json().expect("confirmation json");
    assert_eq!(confirmation.detail, "Driver deleted");

    let response = client.get(format!("/drivers/{}", max.id)).dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let response = client.get(format!("/drivers/{}/laps", max.id)).dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn malformed_and_missing_requests_map_to_http_errors() {
    let client = client();

    // unknown ids are 404
    let response = client.get("/drivers/no-such-id").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let response = client.delete("/drivers/no-such-id").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let response = client
        .post("/drivers/no-such-id/laps")
        .header(ContentType::JSON)
        .body(r#"{"lap_time": 70.0, "track": "Spa"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    // malformed payloads are 400
    let response = client
        .post("/drivers")
        .header(ContentType::JSON)
        .body(r#"{"name": "  "}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    let seeded: Vec<ApiDriver> = client.get("/drivers").dispatch().into_json().unwrap();
    let driver_id = seeded[0].id.clone();
    let response = client
        .post(format!("/drivers/{}/laps", driver_id))
        .header(ContentType::JSON)
        .body(r#"{"lap_time": -3.0, "track": "Spa"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let response = client
        .post(format!("/drivers/{}/laps", driver_id))
        .header(ContentType::JSON)
        .body(r#"{"lap_time": 70.0, "track": ""}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}
