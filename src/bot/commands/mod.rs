//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Boss selection menus
pub mod catalog;

/// Role checks for administrative commands
pub mod checks;

/// Global discount command
pub mod discount;

/// General utility commands
pub mod general;

// Export commands
pub use catalog::*;
pub use discount::*;
pub use general::*;
