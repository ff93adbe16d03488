pub mod contract;
pub mod error;
pub mod execute;
pub mod models;
pub mod msg;
pub mod query;
pub mod scoring;
pub mod state;
pub mod ticket;
pub mod util;
pub mod xorshift32;
