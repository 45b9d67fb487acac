//! Errors returned by the [`Aquarium`](crate::aquarium::Aquarium) API.
//!
//! None of these can happen inside the frame loop; they all describe a host
//! handing the engine something it cannot accept.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AquariumError {
    /// A fish for this entry id is already swimming in this view.
    #[error("an agent for entry '{0}' is already swimming")]
    DuplicateAgent(String),
    #[error("entry id must not be empty")]
    EmptyId,
    #[error("no agent for entry '{0}'")]
    UnknownAgent(String),
    /// The entry list could not be read or parsed.
    #[error("invalid entries: {0}")]
    Entries(String),
}
