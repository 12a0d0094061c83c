pub mod config;
pub mod core;
pub mod input;
pub mod report;

pub use crate::core::composer::{transliterate, Composer};
pub use report::{OutputUnit, Report};

