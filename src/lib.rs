pub mod schema;
pub mod errors;
pub mod bootstrap;

pub mod macros {
    pub mod database_error_handeler;
}

pub mod modules;
pub mod routes {
    pub mod driver;
    pub mod lap;
}
