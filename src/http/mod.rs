// HTTP surface for the front-end

pub mod routes;

pub use routes::router;
