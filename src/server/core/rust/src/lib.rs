/* src/server/core/rust/src/lib.rs */

pub mod errors;
pub mod mapping;
pub mod node;
pub mod redirect;
pub mod resolve;
pub mod server;
pub mod store;
pub mod sync;

// Re-exports for ergonomic use
pub use errors::{NewsdeskError, TaxonomyError};
pub use mapping::{CategoryMaps, Diagnostic, MAX_DEPTH};
pub use node::{CategoryNode, Locale, Title, hyphenate, slugify};
pub use redirect::{RedirectConfig, RedirectDecision, RedirectReason, Redirector};
pub use resolve::{CategoryRef, Resolution, StaticParams, Taxonomy};
pub use server::{NewsdeskParts, NewsdeskServer};
pub use store::{TaxonomyStore, load_taxonomy_dir, load_taxonomy_file, parse_definitions};
pub use sync::{CategoryRecord, CategoryStore, JsonFileStore, SyncPlan, SyncReport, apply, flatten};
