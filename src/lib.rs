pub mod adapters;
pub mod api;
pub mod application;
pub mod calculator;
pub mod config;
pub mod domain;
pub mod ports;
