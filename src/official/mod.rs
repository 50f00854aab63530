//! Client for the documented cleverbot.com REST API (`/getreply`).

pub mod client;
pub mod response;
pub mod tuning;

pub use client::Client;
pub use response::{Interaction, Reply};
pub use tuning::Tweaks;
