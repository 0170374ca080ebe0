mod chat;
mod health;
mod points;
mod root;

pub use chat::chat_with_bot;
pub use health::health_check;
pub use points::get_points;
pub use root::service_descriptor;
