use std::env;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use dotenvy::dotenv;

/// Open a connection to the sqlite store named by `DATABASE_URL`.
///
/// Every request opens its own connection and drops it when the handler
/// returns. An unreachable store is fatal to the request.
pub fn establish_connection() -> SqliteConnection {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| String::from("laptimes.db"));

    let mut connection = SqliteConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url));

    // sqlite leaves referential integrity off unless asked per connection
    connection
        .batch_execute("PRAGMA foreign_keys = ON;")
        .unwrap_or_else(|_| panic!("Error enabling foreign keys on {}", database_url));

    connection
}
