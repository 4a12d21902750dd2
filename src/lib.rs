pub mod config;
pub mod content;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod paths;
pub mod progress;
pub mod services;
pub mod session;
pub mod srs;
pub mod state;

#[cfg(test)]
pub mod testing;
