//! Squad loadout recommender: usage-weighted ranking over an item catalog, curated per-role
//! suggestions, faction-aware grenade picks and a squad-wide booster cap, plus a uniform
//! random "challenge" mode.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod loadout;

pub use error::{HellpodError, Result};
