//! Use-case layer: validates preconditions and orchestrates the domain.

pub mod game_flow;
pub mod players;
