pub mod admission;
pub mod attributes;
pub mod contract;
pub mod error;
pub mod msg;
pub mod players;
pub mod state;
pub mod winner;
