//! Core business logic - framework-agnostic catalog, pricing and selection handling.
//!
//! Nothing in here touches Discord. The bot layer turns these results into menus, modals
//! and embeds.

/// Role allow-list checks for administrative commands
pub mod access;
/// Calculation records posted to the log channel
pub mod audit;
/// Catalog store - JSON-backed entries per category
pub mod catalog;
/// Global discount value and its validation
pub mod discount;
/// Pricing engine - per-component price breakdown
pub mod pricing;
/// Encoded selection keys carried through Discord components
pub mod selection;
