//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`grid`] - Generate a tile grid layer as GeoJSON
//! - [`tile`] - Coordinate lookups (lat/lon → tile, tile → bounds)
//! - [`config`] - Configuration management (path, show, init)

pub mod config;
pub mod grid;
pub mod tile;
