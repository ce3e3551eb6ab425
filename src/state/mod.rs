//! Application state module

mod app_state;
mod form;
mod leaves;
mod schema;
mod splash_state;
mod submission;
mod validate;

pub use app_state::*;
pub use form::*;
pub use leaves::*;
pub use schema::*;
pub use splash_state::*;
pub use submission::*;
pub use validate::*;
