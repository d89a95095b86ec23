pub mod service;

pub mod models {
    pub mod driver;
    pub mod lap;

    pub mod general;
}

pub mod helpers {
    pub mod logging;
}
