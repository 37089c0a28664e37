//! HTTP request handlers.

mod agents;
mod chat;
mod error;
mod health;
mod users;

pub use agents::{get_agent_count, get_agents};
pub use chat::{CHAT_FIELDS_REQUIRED_MESSAGE, send_chat};
pub use error::{
    ApiError, CONFIGURATION_MESSAGE, CONNECTIVITY_MESSAGE, INVALID_FORMAT_MESSAGE,
};
pub use health::{livez, readyz, version};
pub use users::{WALLET_REQUIRED_MESSAGE, create_user, get_user};
