//! Reusable list-view machinery.
//!
//! Every collection page (categories, suppliers, branches, roles, users,
//! sales history) renders the same thing: a searchable, paginated table over
//! one REST collection, with delete reconciliation. [`ListController`] owns
//! that whole lifecycle; the pure pieces (paging math, envelope
//! normalization, state transitions) live in their own modules so they can be
//! tested without a browser.

pub mod controller;
pub mod debounce;
pub mod envelope;
pub mod paging;
pub mod query;
pub mod state;

pub use controller::{ListController, ListControllerOptions};
pub use debounce::Debouncer;
pub use envelope::ListPayload;
pub use query::ListQuery;
pub use state::{FetchSeq, ListState};

use serde::Serialize;

/// Implemented by every entity shown in a list view.
///
/// The controller treats entities as opaque except for their id, which it
/// needs for delete reconciliation and entity-cache keys.
pub trait ListEntity: Clone + Serialize + Send + Sync + 'static {
    fn entity_id(&self) -> &str;
}
