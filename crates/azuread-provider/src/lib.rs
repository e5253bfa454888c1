//! # azuread-provider
//!
//! Resource lifecycle for Azure AD settings managed through Microsoft Graph.
//!
//! A [`Provider`] owns a typed [`ProviderContext`] and a registry of
//! [`Resource`] implementations. Every lifecycle call receives the context
//! explicitly and reports failures as [`Diagnostics`].
//!
//! ```ignore
//! use azuread_provider::{Provider, ProviderContext, config::loader::load_config};
//!
//! let config = load_config(None)?;
//! let provider = Provider::new(ProviderContext::from_config(&config)?);
//! let state = provider
//!     .import("azuread_service_principal_token_signing_certificate", id)
//!     .await?;
//! ```

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod importer;
pub mod provider;
pub mod resource;
pub mod resource_data;
pub mod schema;
pub mod services;

pub use config::ProviderConfig;
pub use context::ProviderContext;
pub use diagnostics::{DiagResult, Diagnostic, Diagnostics, Severity};
pub use provider::Provider;
pub use resource::Resource;
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeType, Schema};
