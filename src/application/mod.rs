//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Startup orchestration (candidate probing)
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
