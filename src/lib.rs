//! Neoviz - 3D visualizer for graph database nodes and relationships.
//!
//! Fetches nodes and relationships from a graph-database-backed REST API
//! and renders them as an interactive spherical layout. Clicking a node
//! highlights its incident edges and shows its attributes in a side panel.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod visualization;
