//! Wayfarer library entry points.
//!
//! This crate exposes helpers to load a place/road map database from its
//! textual description, build the routing graph, and compute least-cost
//! routes from a start place to every other place. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod database;
pub mod error;
pub mod graph;
mod heap;
pub mod report;
pub mod routing;

pub use database::{load_map, load_map_file, TokenReader};
pub use error::{Error, Result};
pub use graph::{Cost, Edge, Graph, Vertex, VertexId, INFINITY, MAX_NAME_LEN, MAX_VERTICES};
pub use report::{PathEntry, PathReport};
pub use routing::{shortest_paths, ShortestPathTree};
