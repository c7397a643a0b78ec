//! Pages

pub mod detail;
