//! Domain layer - Core types with no platform dependencies
//! 
//! This layer contains:
//! - Entities: Registration records
//! - Traits: Abstractions over dynamic modules

pub mod entities;
pub mod traits;
