//! Interactive manager for a price-ordered car inventory loaded from a text file

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
pub mod maintenance;
pub mod output;
pub mod query;
pub mod record;
pub mod session;
