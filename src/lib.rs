//! segurocash-site library
//!
//! Static content and configuration for the SeguroCash loan marketing site.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library holds the declarative content the presentation layer renders:
//!
//! - [`content`] - Authored FAQ entries and navigation menu, in display order
//! - [`constants`] - Named site configuration literals (contact addresses, legal text, external links)
//! - [`store`] - Read-only access to the content, with the display name resolved once at startup
//! - [`models`] - Data structures handed to the presentation layer
//! - [`errors`] - Error types used throughout the crate
//!
//! ## Example Usage
//!
//! The store is initialized on first access and immutable afterwards, so it can
//! be read freely from any thread:
//!
//! ```
//! use segurocash_site::store::site_content;
//!
//! let content = site_content();
//! for item in content.faq_list() {
//!     println!("{}", item.title);
//! }
//! let brand = content.config_value("FOOTER_BRAND")?;
//! # Ok::<(), segurocash_site::errors::AppError>(())
//! ```

pub mod constants;
pub mod content;
pub mod errors;
pub mod models;
pub mod store;
