//! Domain models
//!
//! Read-only projections of backend resources plus the request payloads
//! sent back to it. Wire names are camelCase.

pub mod address;
pub mod contact;
pub mod employee;
pub mod job_title;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod stats;
pub mod wallet;

pub use address::*;
pub use contact::*;
pub use employee::*;
pub use job_title::*;
pub use menu::*;
pub use order::*;
pub use restaurant::*;
pub use stats::*;
pub use wallet::*;
