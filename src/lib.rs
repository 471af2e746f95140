//! Tabletop API - Backend for a board game catalog
//!
//! This crate provides the read-only REST API behind the catalog frontend:
//! - Filtered, sorted and paginated game listings
//! - Game detail with embedded genres
//! - Genre listing and health checks

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
