//! Customer API: token-protected JSON CRUD over a single `customer` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use model::Customer;
pub use routes::{app, common_routes, customer_routes};
pub use state::AppState;
pub use store::{connect_lazy, CustomerStore, MemoryStore, PgStore, UnconfiguredStore};
