//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
    pub mod extractors;
}

pub use web_api::routes::map_routes;
pub use web_api::controllers::*;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
    pub mod validation;
}

pub use shared::models::*;
pub use shared::dto::*;
pub use shared::validation;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod connection;
    pub mod data_context;
}
//---------------------------------------
