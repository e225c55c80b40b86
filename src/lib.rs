//! polymc - Estimate polygon areas with multithreaded Monte Carlo sampling

pub mod config;
pub mod domain;
pub mod geometry;
pub mod polyfile;
pub mod sampler;
