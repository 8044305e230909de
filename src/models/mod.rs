pub mod common;
pub mod request;
pub mod response;
pub mod schema;

pub use common::*;
pub use request::*;
pub use response::*;
pub use schema::*;
