#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

use laptimes_api::bootstrap::{run_migrations, seed_demo_data};
use laptimes_api::modules::helpers::logging::setup_logging;
use laptimes_api::modules::models::general::establish_connection;
use laptimes_api::routes::{driver, lap};

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("Failed to setup logging");

    // bring the store up to date before taking any traffic
    let conn = &mut establish_connection();
    run_migrations(conn);
    seed_demo_data(conn).expect("Failed to seed demo data");

    // start the webserver
    rocket::build().mount(
        "/",
        routes![
            // drivers
            driver::create,
            driver::list,
            driver::single,
            driver::update,
            driver::delete,
            // laps
            lap::create,
            lap::list,
            lap::single,
            lap::update,
            lap::delete,
        ],
    )
}
