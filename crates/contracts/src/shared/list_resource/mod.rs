//! Generic list-resource controller
//!
//! Every admin page is the same loop: fetch the collection, filter it by a free-text
//! query, sort, slice into pages, and drive a create/edit dialog whose save refetches
//! the list. The pieces:
//!
//! - `filter` / `sort` / `pagination`: pure view derivation
//! - `draft` / `edit_session`: form state for the create/edit dialog
//! - `store`: canonical rows plus loading/error flags and in-flight tokens
//! - `resource`: per-entity configuration (`ListResource`)
//! - `request`: REST request shaping
//! - `controller`: ties the above together for one entity
//! - `binding`: async driver over a `ResourceApi`

pub mod binding;
pub mod columns;
pub mod controller;
pub mod draft;
pub mod edit_session;
pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod request;
pub mod resource;
pub mod sort;
pub mod store;

pub use binding::{refresh, submit, ControllerHandle, ResourceApi};
pub use columns::{CellFormat, ColumnSpec};
pub use controller::{FetchTicket, ListController, MutationTicket, SubmitOutcome};
pub use draft::{DraftValue, FieldDefault, FieldKind, FieldSpec, FormDraft};
pub use edit_session::{EditMode, EditSession};
pub use error::{ApiError, ListError};
pub use filter::{filter_rows, Searchable};
pub use pagination::{page_slice, total_pages, PageSize, Paginator};
pub use request::{ApiRequest, FetchParams, HttpMethod};
pub use resource::{HotelScope, ListResource, UpdateRoute};
pub use sort::{sort_rows, SortState};
pub use store::{FetchOutcome, RequestToken, ResourceStore};

#[cfg(test)]
pub(crate) mod testing;
