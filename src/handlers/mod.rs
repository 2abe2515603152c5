pub mod get;
pub mod greeting;
pub mod health;
pub mod set;

pub use get::get_handler;
pub use greeting::greeting_handler;
pub use health::health_handler;
pub use set::set_handler;
