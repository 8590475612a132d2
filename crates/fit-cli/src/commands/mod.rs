pub mod dispatch;
pub mod parse;
pub mod schema;
pub mod session;
