//! Collaborator contracts consumed by the orchestration services.

pub mod games;
pub mod players;
