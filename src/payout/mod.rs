//! Payout tables: tiered, nonlinear amounts by fan and stake.
//!
//! Two independent curve families:
//! - half gun (`HalfGunEntry`): discarder share plus bystander share
//! - full gun (`FullGunEntry`): discarder share only
//!
//! Each family has one table per `StakePreset` covering fan 0..=10, with a
//! fixed extrapolation rule above that.

mod curves;
pub mod table;

pub use curves::TABULATED_MAX_FAN;
pub use table::{full_gun_entry, half_gun_entry, FullGunEntry, HalfGunEntry};
