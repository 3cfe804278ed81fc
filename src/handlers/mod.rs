//! HTTP handlers for the Greatea inventory API

pub mod analytics;
pub mod expenses;
pub mod health;
pub mod orders;
pub mod purchases;
pub mod restocks;
pub mod stock;
pub mod suppliers;
pub mod supplies;
pub mod usage;

pub use analytics::*;
pub use expenses::*;
pub use health::*;
pub use orders::*;
pub use purchases::*;
pub use restocks::*;
pub use stock::*;
pub use suppliers::*;
pub use supplies::*;
pub use usage::*;
