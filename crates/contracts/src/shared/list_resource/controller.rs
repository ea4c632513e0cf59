use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

use super::draft::{default_draft, draft_from_row, payload_from_draft, DraftValue};
use super::edit_session::{EditMode, EditSession};
use super::error::{ApiError, ListError};
use super::filter::{field_text_of, filter_rows, Searchable};
use super::pagination::{total_pages, PageSize, Paginator};
use super::request::FetchParams;
use super::resource::{ListResource, UpdateRoute};
use super::sort::{sort_rows, SortState};
use super::store::{FetchOutcome, RequestToken, ResourceStore};
use crate::shared::session::SessionContext;

/// Issued by `begin_fetch`, handed back to `finish_fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub params: FetchParams,
}

/// Issued by `begin_submit`: everything the transport needs for one create/update
#[derive(Debug, Clone, PartialEq)]
pub struct MutationTicket {
    pub token: RequestToken,
    pub mode: EditMode,
    /// Identity of the edited row as it was loaded (id, or business key for
    /// `PutByField` routes); `None` on create
    pub key: Option<String>,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dialog closed; the caller refetches
    Saved,
    /// Dialog stays open with the message
    Failed(String),
    /// Response of a superseded request; ignored
    Stale,
}

/// Fetch → filter → sort → paginate → edit, for one entity
#[derive(Debug, Clone)]
pub struct ListController<R: ListResource> {
    session: Arc<SessionContext>,
    store: ResourceStore<R>,
    query: String,
    sort: SortState,
    pager: Paginator,
    editor: EditSession,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> ListController<R> {
    pub fn new(session: Arc<SessionContext>, page_size: PageSize) -> Self {
        Self {
            session,
            store: ResourceStore::default(),
            query: String::new(),
            sort: SortState::default(),
            pager: Paginator::new(page_size),
            editor: EditSession::default(),
            _resource: PhantomData,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Swap the session (hotel switch, sign-out). Rows, dialog and in-flight requests are dropped.
    pub fn replace_session(&mut self, session: Arc<SessionContext>) {
        self.session = session;
        self.store.clear();
        self.editor = EditSession::default();
        self.pager.reset();
    }

    pub fn store(&self) -> &ResourceStore<R> {
        &self.store
    }

    pub fn loading(&self) -> bool {
        self.store.loading()
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.store.error()
    }

    pub fn editor(&self) -> &EditSession {
        &self.editor
    }

    // ------------------------------------------------------------------
    // View derivation
    // ------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    /// New query: back to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.pager.reset();
        }
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// New sort: back to page 1
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
        self.pager.reset();
    }

    /// Rows matching the query, in sort order (all pages)
    pub fn filtered_rows(&self) -> Vec<&R> {
        let mut rows = filter_rows(self.store.rows(), &self.query, R::SEARCH_FIELDS);
        sort_rows(&mut rows, &self.sort);
        rows
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_rows().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.pager.page_size().get())
    }

    /// Rows of the current page
    pub fn visible_rows(&self) -> Vec<R> {
        let filtered = self.filtered_rows();
        self.pager.slice(&filtered).iter().map(|row| (*row).clone()).collect()
    }

    pub fn page_index(&self) -> usize {
        self.pager.page_index()
    }

    pub fn page_size(&self) -> PageSize {
        self.pager.page_size()
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pager.set_page_size(page_size);
    }

    pub fn can_go_prev(&self) -> bool {
        self.pager.can_go_prev(self.loading())
    }

    pub fn can_go_next(&self) -> bool {
        self.pager.can_go_next(self.total_pages(), self.loading())
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        let loading = self.loading();
        self.pager.next(total, loading)
    }

    pub fn prev_page(&mut self) -> bool {
        let loading = self.loading();
        self.pager.prev(loading)
    }

    // ------------------------------------------------------------------
    // Remote store binding
    // ------------------------------------------------------------------

    pub fn fetch_params(&self) -> FetchParams {
        FetchParams {
            hotel_id: self.session.hotel_id.clone(),
            ..FetchParams::default()
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        FetchTicket {
            token: self.store.begin_fetch(),
            params: self.fetch_params(),
        }
    }

    /// Rows are replaced on success; the page index is left alone
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<R>, ApiError>) -> FetchOutcome {
        self.store.finish_fetch(ticket.token, result)
    }

    // ------------------------------------------------------------------
    // Edit/create session
    // ------------------------------------------------------------------

    /// Refused while a save is in flight
    pub fn open_create(&mut self) -> bool {
        if self.editor.is_submitting() {
            return false;
        }
        let defaults = default_draft(R::FORM_FIELDS, self.session.actor.as_deref());
        self.editor.open_create(defaults);
        true
    }

    /// Seed the dialog from the row with `id`; `false` if no such row is loaded or a
    /// save is in flight
    pub fn open_edit(&mut self, id: &str) -> bool {
        if self.editor.is_submitting() {
            return false;
        }
        let Some(row) = self.store.rows().iter().find(|row| row.row_id() == id) else {
            return false;
        };
        let baseline = row.search_value();
        let draft = draft_from_row(R::FORM_FIELDS, &baseline);
        self.editor.open_edit(id.to_string(), draft, baseline);
        true
    }

    pub fn set_field(&mut self, name: &str, value: DraftValue) -> bool {
        self.editor.set_field(name, value)
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.editor.cancel()
    }

    /// Validate and enter `Submitting`.
    ///
    /// A validation failure leaves the dialog open with the message and dispatches nothing.
    pub fn begin_submit(&mut self) -> Result<MutationTicket, ListError> {
        let mode = match self.editor.mode() {
            Some(mode) if !self.editor.is_submitting() => mode,
            _ => return Err(ListError::NotEditing),
        };

        if let Err(message) = R::validate(self.editor.fields()) {
            self.editor.reject(message.clone());
            return Err(ListError::Validation(message));
        }

        let mut payload = payload_from_draft(R::FORM_FIELDS, self.editor.fields(), self.editor.baseline());
        self.stamp(&mut payload, mode);

        let key = match (mode, R::update_route(), self.editor.baseline()) {
            (EditMode::Update, UpdateRoute::PutByField(field), Some(baseline)) => {
                Some(field_text_of(baseline, field))
            }
            _ => self.editor.target_id().map(str::to_string),
        };
        self.editor.begin_submit();
        let token = self.store.begin_mutation(mode);
        Ok(MutationTicket {
            token,
            mode,
            key,
            payload,
        })
    }

    pub fn finish_submit(&mut self, ticket: &MutationTicket, result: Result<Value, ApiError>) -> SubmitOutcome {
        if !self.store.finish_mutation(ticket.token) {
            return SubmitOutcome::Stale;
        }
        match result {
            Ok(_) => {
                self.editor.succeed();
                SubmitOutcome::Saved
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("{} save failed: {}", R::TITLE, message);
                self.editor.fail(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    fn stamp(&self, payload: &mut Value, mode: EditMode) {
        let Value::Object(body) = payload else {
            return;
        };
        match mode {
            EditMode::Create => {
                body.remove(R::ID_FIELD);
                if let (Some(field), Some(hotel_id)) = (R::HOTEL_FIELD, &self.session.hotel_id) {
                    body.insert(field.to_string(), Value::String(hotel_id.clone()));
                }
                if let (true, Some(actor)) = (R::AUDITED, &self.session.actor) {
                    body.insert("createdBy".to_string(), Value::String(actor.clone()));
                }
            }
            EditMode::Update => {
                if let (true, Some(actor)) = (R::AUDITED, &self.session.actor) {
                    body.insert("updatedBy".to_string(), Value::String(actor.clone()));
                }
            }
        }
    }
}
