pub mod bidding;
pub mod config;
pub mod database;
pub mod handlers;
pub mod query;
pub mod store;
