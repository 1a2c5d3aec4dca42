//! Error pages library entry points.
//!
//! This crate implements the request-independent half of the custom error
//! pages backend: classifying upstream status codes against the fixed error
//! catalog, negotiating the response representation, and rendering the JSON,
//! HTML and plain-text documents. The HTTP surface (header extraction,
//! routing, response writing) lives in `errorpages-service`, which should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod context;
pub mod error;
pub mod negotiate;
pub mod render;
pub mod template;

pub use catalog::{classify, ErrorClassification};
pub use context::ErrorContext;
pub use error::{Error, Result};
pub use negotiate::ResponseFormat;
pub use render::{iso8601, render_payload, RenderedPayload};
pub use template::HtmlTemplate;
