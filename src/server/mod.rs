//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Not-found rules and schedule validation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Allocator** (`allocator/`) - Collection-unique id assignment for new records
//! - **Model Layer** (`model/`) - Domain models, patches and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool and id allocator)
//! - **Startup** (`startup`) - Logging and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts path and body, converts DTOs to params, calls the service
//! 3. **Service** applies validation, hands creates to the allocator-backed repository
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod allocator;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
