pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod extract;
pub mod request_id;
pub mod openapi;

pub use startup::run;
