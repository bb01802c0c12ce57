//! # zt_core
//!
//! Shared foundation for the zt developer toolbox.
//!
//! Every tool in zt is a stateless transformation living in one of the tool
//! crates (`zt_security`, `zt_encoding`, `zt_text`, `zt_time`, `zt_debug`).
//! This crate holds what they have in common:
//!
//! - **Catalog**: [`ToolDescriptor`] and [`ToolRegistry`] describe which tools exist
//!   and how they are grouped
//! - **Configuration**: [`ToolboxConfig`] carries user defaults loaded from TOML
//! - **Status**: [`Validity`] reported by every validating tool
//! - **Errors**: [`CoreError`] for catalog and configuration failures
//!
//! # Example
//!
//! ```rust
//! use zt_core::{ToolCategory, ToolDescriptor, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(ToolDescriptor::new(
//!     "hash",
//!     "Hash Calculator",
//!     ToolCategory::Security,
//!     "Compute message digests",
//! ));
//!
//! assert!(registry.contains("hash"));
//! assert_eq!(registry.by_category(ToolCategory::Security).len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod status;

pub use config::{
    BeautifyDefaults, DateTimeDefaults, HashDefaults, OutputDefaults, OutputFormat,
    PasswordDefaults, ToolboxConfig, UuidDefaults, CONFIG_ENV_VAR,
};
pub use error::{CoreError, CoreResult};
pub use registry::{ToolCategory, ToolDescriptor, ToolRegistry};
pub use status::Validity;
