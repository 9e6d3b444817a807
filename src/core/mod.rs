//! Configuration and data models shared by the forwarder

pub mod config;
pub mod models;
