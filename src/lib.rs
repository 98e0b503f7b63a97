pub mod models;
pub mod seed;
pub mod services;
pub mod cli;
pub mod utils;

pub use anyhow::{Error, Result};
