pub mod animation;
pub mod config;
pub mod utilities;
pub mod views;
