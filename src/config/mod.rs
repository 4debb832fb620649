pub mod app;
pub mod validator;

pub use app::*;
pub use validator::*;
