//! Tool adapter engine.
//!
//! Every tool exposed by the server is one instance of the same pipeline:
//!
//! 1. `binder` - validate the caller's argument bundle against the schema
//! 2. `request` - substitute path parameters, assemble the query, add the key
//! 3. `client` - execute the request against the remote API
//! 4. `decoder` - pretty-print a conforming body, or pass it through raw
//!
//! `adapter` composes the stages behind a single `invoke` call.

pub mod adapter;
pub mod binder;
pub mod client;
pub mod decoder;
pub mod request;
pub mod result;
pub mod schema;

pub use adapter::{ToolAdapter, ToolDefinition};
pub use binder::{BindingError, BoundArguments, bind};
pub use client::{ApiClient, ClientError, RawResponse, ReqwestApiClient};
pub use decoder::{Decoded, ResultShape, decode};
pub use request::{BuiltRequest, build};
pub use result::ToolResult;
pub use schema::{
    HttpMethod, ParamKind, ParamLocation, ParameterSpec, PathTemplate, SchemaDescriptor,
    SchemaError,
};
