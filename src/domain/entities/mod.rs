//! Domain entities - Core objects with no infrastructure dependencies

pub mod registration;

pub use registration::Registration;
