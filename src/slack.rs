mod api;
mod message;

pub use self::api::*;
pub use self::message::*;
