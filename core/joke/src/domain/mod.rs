//! joke 固有のドメイン型（型と不変条件）

pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod joke;

pub use command::JokeCommand;
pub use config::JokeConfig;
pub use error::AcquireError;
pub use history::History;
pub use joke::Joke;
