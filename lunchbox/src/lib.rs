//! Lunchbox - corporate food ordering
//!
//! Client-side core of the ordering app: the cart, the delivery cutoff,
//! form validation and submission, payment relay, earnings receipts and
//! report export. Backend access goes through [`lunchbox_client::Api`].
//!
//! ```text
//! lunchbox/src/
//! ├── core/       # config, errors
//! ├── cart/       # cart state
//! ├── cli.rs      # command line
//! ├── forms/      # validation, submit guard, form workflows
//! ├── utils/      # logging, image allow-list
//! ├── delivery.rs # next working day, cutoff
//! ├── ordering.rs # ordering session, checkout
//! ├── payments.rs # payment outcome relay
//! ├── receipt.rs  # earnings receipt HTML
//! └── report.rs   # monthly report CSV
//! ```

pub mod cart;
pub mod cli;
pub mod core;
pub mod delivery;
pub mod forms;
pub mod ordering;
pub mod payments;
pub mod receipt;
pub mod report;
pub mod utils;

pub use cart::{Cart, CartError, CartLine, LineId};
pub use crate::core::{AppError, AppResult, Config, LogSettings};
pub use delivery::{DeliveryWindow, can_order, next_working_day};
pub use forms::SubmitGuard;
pub use ordering::OrderingSession;
pub use receipt::render_receipt;
pub use report::write_monthly_report;
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, start logging, then read the configuration
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let log = LogSettings::from_env();
    init_logger_with_file(Some(&log.level), log.dir.as_deref());
    Config::from_env()
}
