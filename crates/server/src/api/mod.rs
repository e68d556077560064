pub mod catalog;
pub mod handlers;
pub mod history;
pub mod middleware;
pub mod recommendations;
pub mod routes;

pub use routes::create_router;
