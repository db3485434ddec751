//! CLI command implementations.

pub mod bootstrap;
pub mod price;

// Re-export argument structs for convenience
pub use bootstrap::BootstrapArgs;
pub use price::PriceArgs;
