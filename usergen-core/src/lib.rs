pub mod card;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod webapi;
