//! # azuread-graph
//!
//! A small Microsoft Graph client covering the service principal calls the
//! AzureAD provider needs.
//!
//! ## Overview
//!
//! - [`GraphClient`] wraps `reqwest`, injects bearer tokens and decodes OData
//!   error bodies into [`GraphError`].
//! - [`TokenCache`] resolves [`Credentials`] into access tokens, either a
//!   pre-issued token or the client credentials grant.
//! - [`ServicePrincipalsApi`] is the seam resource code depends on;
//!   [`ServicePrincipalsClient`] is its HTTP implementation.
//!
//! ## Example
//!
//! ```ignore
//! use azuread_graph::{Credentials, GraphClient, GraphClientOptions, ServicePrincipalsClient};
//!
//! let client = GraphClient::new(
//!     Credentials::access_token("eyJ0eXAi..."),
//!     &GraphClientOptions::default(),
//! )?;
//! let service_principals = ServicePrincipalsClient::new(client.into());
//! let (sp, _status) = service_principals.get(object_id, &Query::default()).await?;
//! ```

mod auth;
mod client;
mod environment;
mod error;
pub mod model;
pub mod odata;
mod service_principals;

pub use auth::{Credentials, TokenCache};
pub use client::{GraphClient, GraphClientOptions};
pub use environment::CloudEnvironment;
pub use error::{GraphError, GraphResult};
pub use model::{DirectoryObject, ServicePrincipal, StringNullWhenEmpty};
pub use odata::Query;
pub use reqwest::StatusCode;
pub use service_principals::{ServicePrincipalsApi, ServicePrincipalsClient};
