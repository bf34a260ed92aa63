//! Multi-tenant theme system: a registry of resolved themes built once at
//! bootstrap, and a scoped provider for switching between them.
//!
//! Tenants are described as partial JSON fragments deep-merged onto a
//! shared base document; after the registry is built, switching themes is
//! a pure lookup.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod merge;
pub use merge::deep_merge;

mod registry;
pub use registry::*;

mod provider;
pub use provider::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
