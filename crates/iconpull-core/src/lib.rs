pub mod config;
pub mod logging;

pub mod concept;
pub mod extract;
pub mod gather;
pub mod manifest;
pub mod pipeline;
pub mod score;
pub mod select;
pub mod transfer;
