//! Weight and energy-balance tracking: daily records, a linear trend forecast, and a
//! weekly milestone schedule against a fixed goal.

pub mod config;
pub mod db;
pub mod energy;
pub mod milestones;
pub mod models;
pub mod projection;
pub mod service;
pub mod store;
pub mod units;
