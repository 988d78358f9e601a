//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ConfigRequest, DataRequest};
pub use responses::{
    ClearResponse, ConfigResponse, DataOrigin, DataResponse, ErrorResponse, HealthResponse,
    StateEntry, StateResponse, StatsResponse,
};
