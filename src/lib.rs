pub mod animation;
pub mod cli;
pub mod consts;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod plot;
