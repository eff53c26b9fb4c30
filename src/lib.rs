#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

pub mod allocation;
pub mod allocator;
pub mod app_state;
pub mod bar;
pub mod bar_kind;
pub mod bridge;
pub mod config;
pub mod diagram;
pub mod inventory;
pub mod inventory_error;
pub mod load_request;
pub mod plate;
pub mod preferences;
pub mod report;
pub mod unit;
