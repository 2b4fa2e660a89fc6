//! Metro route planner.
//!
//! Computes routes through a city's metro network, given stations and the
//! lines they sit on, under three cost models: fewest stations, least travel
//! time (with a penalty per change of line), and cheapest fare.

pub mod cache;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod stations;
pub mod web;
