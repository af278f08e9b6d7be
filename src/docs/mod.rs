//! Google Docs v1 client: token handling, wire types and one method per
//! supported document operation.

pub mod auth;
pub mod client;
pub mod factory;
pub mod options;
pub mod requests;
pub mod style;
pub mod transport;
pub mod values;

pub use client::DocsClient;
pub use factory::ClientFactory;
