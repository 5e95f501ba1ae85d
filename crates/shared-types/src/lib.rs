pub mod config;
pub mod error;
pub mod load_state;
pub mod models;
pub mod navigation;
pub mod profile_form;
pub mod role;
pub mod routes;
pub mod session;

pub use config::*;
pub use error::*;
pub use load_state::*;
pub use models::*;
pub use navigation::*;
pub use profile_form::*;
pub use role::*;
pub use routes::*;
pub use session::*;
