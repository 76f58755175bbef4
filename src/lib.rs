pub mod error;
pub mod frontier;
pub mod resolver;
pub mod search;
pub mod store;
