//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure.
//!
//! Adapter categories:
//! - `persistence`: JSON store files and backup snapshots

pub mod persistence;
