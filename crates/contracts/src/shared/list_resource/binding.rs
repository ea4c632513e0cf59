//! Async I/O around a `ListController`
//!
//! The controller itself is synchronous; these helpers take its tickets across the
//! network call. The controller is reached through a `ControllerHandle` so the view can
//! keep it in whatever reactive cell it uses. If the handle is gone when a response
//! arrives (page unmounted) the response is dropped.

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

use super::controller::{ListController, SubmitOutcome};
use super::edit_session::EditMode;
use super::error::{ApiError, ListError};
use super::request::FetchParams;
use super::resource::ListResource;
use super::store::FetchOutcome;

/// Network side of the remote store binding. The only place that performs I/O.
#[async_trait(?Send)]
pub trait ResourceApi<R: ListResource> {
    async fn fetch_all(&self, params: &FetchParams) -> Result<Vec<R>, ApiError>;

    /// Returns the response body (`Null` when empty)
    async fn create(&self, payload: &Value) -> Result<Value, ApiError>;

    /// `key` is the identity of the edited row
    async fn update(&self, key: &str, payload: &Value) -> Result<Value, ApiError>;
}

/// Access to a controller owned by the view
pub trait ControllerHandle<R: ListResource> {
    /// `None` if the controller no longer exists
    fn with_controller<O>(&self, f: impl FnOnce(&mut ListController<R>) -> O) -> Option<O>;
}

impl<R: ListResource> ControllerHandle<R> for Rc<RefCell<ListController<R>>> {
    fn with_controller<O>(&self, f: impl FnOnce(&mut ListController<R>) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// `fetchAll`: one list request. Not retried.
pub async fn refresh<R, A, H>(handle: &H, api: &A) -> Option<FetchOutcome>
where
    R: ListResource,
    A: ResourceApi<R> + ?Sized,
    H: ControllerHandle<R>,
{
    let ticket = handle.with_controller(|c| c.begin_fetch())?;
    let result = api.fetch_all(&ticket.params).await;
    handle.with_controller(move |c| c.finish_fetch(ticket, result))
}

/// Save the open dialog. On success the dialog closes and the list is refetched once.
pub async fn submit<R, A, H>(handle: &H, api: &A) -> Result<SubmitOutcome, ListError>
where
    R: ListResource,
    A: ResourceApi<R> + ?Sized,
    H: ControllerHandle<R>,
{
    let ticket = handle
        .with_controller(|c| c.begin_submit())
        .ok_or(ListError::NotEditing)??;

    let result = match (ticket.mode, ticket.key.as_deref()) {
        (EditMode::Update, Some(key)) => api.update(key, &ticket.payload).await,
        _ => api.create(&ticket.payload).await,
    };

    let outcome = handle
        .with_controller(|c| c.finish_submit(&ticket, result))
        .unwrap_or(SubmitOutcome::Stale);

    if outcome == SubmitOutcome::Saved {
        refresh(handle, api).await;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_resource::draft::DraftValue;
    use crate::shared::list_resource::pagination::PageSize;
    use crate::shared::list_resource::testing::{room, rooms, session, RoomType};
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::oneshot;

    /// In-memory backend counting the calls it receives
    #[derive(Default)]
    struct FakeServer {
        rows: RefCell<Vec<RoomType>>,
        list_calls: Cell<usize>,
        saves: RefCell<Vec<(Option<String>, Value)>>,
        reject_with: Option<ApiError>,
    }

    #[async_trait(?Send)]
    impl ResourceApi<RoomType> for FakeServer {
        async fn fetch_all(&self, _params: &FetchParams) -> Result<Vec<RoomType>, ApiError> {
            self.list_calls.set(self.list_calls.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, payload: &Value) -> Result<Value, ApiError> {
            self.saves.borrow_mut().push((None, payload.clone()));
            if let Some(err) = &self.reject_with {
                return Err(err.clone());
            }
            let mut row: RoomType = serde_json::from_value(payload.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
            row.id = self.rows.borrow().len() as i64 + 1;
            self.rows.borrow_mut().push(row);
            Ok(Value::Null)
        }

        async fn update(&self, key: &str, payload: &Value) -> Result<Value, ApiError> {
            self.saves.borrow_mut().push((Some(key.to_string()), payload.clone()));
            if let Some(err) = &self.reject_with {
                return Err(err.clone());
            }
            let row: RoomType = serde_json::from_value(payload.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
            let mut rows = self.rows.borrow_mut();
            match rows.iter_mut().find(|r| r.id.to_string() == key) {
                Some(slot) => *slot = row,
                None => return Err(ApiError::http(404, "Room type not found")),
            }
            Ok(Value::Null)
        }
    }

    /// Backend whose list responses are released by the test
    struct GatedApi {
        pending: RefCell<VecDeque<oneshot::Receiver<Result<Vec<RoomType>, ApiError>>>>,
    }

    #[async_trait(?Send)]
    impl ResourceApi<RoomType> for GatedApi {
        async fn fetch_all(&self, _params: &FetchParams) -> Result<Vec<RoomType>, ApiError> {
            let gate = self.pending.borrow_mut().pop_front();
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(ApiError::Network("gate dropped".into()))),
                None => Err(ApiError::Network("unexpected request".into())),
            }
        }

        async fn create(&self, _payload: &Value) -> Result<Value, ApiError> {
            Err(ApiError::Network("read-only".into()))
        }

        async fn update(&self, _key: &str, _payload: &Value) -> Result<Value, ApiError> {
            Err(ApiError::Network("read-only".into()))
        }
    }

    /// Handle of a page that has been unmounted
    struct Unmounted;

    impl ControllerHandle<RoomType> for Unmounted {
        fn with_controller<O>(&self, _f: impl FnOnce(&mut ListController<RoomType>) -> O) -> Option<O> {
            None
        }
    }

    fn handle() -> Rc<RefCell<ListController<RoomType>>> {
        Rc::new(RefCell::new(ListController::new(Arc::new(session()), PageSize::Ten)))
    }

    fn server(rows: Vec<RoomType>) -> FakeServer {
        FakeServer {
            rows: RefCell::new(rows),
            ..FakeServer::default()
        }
    }

    #[tokio::test]
    async fn refresh_replaces_rows() {
        let handle = handle();
        let api = server(rooms(4));
        assert_eq!(refresh(&handle, &api).await, Some(FetchOutcome::Applied));
        assert_eq!(handle.borrow().store().rows().len(), 4);
        assert!(!handle.borrow().loading());
    }

    #[tokio::test]
    async fn saved_update_refetches_once_and_keeps_the_page() {
        let handle = handle();
        let api = server(rooms(23));
        refresh(&handle, &api).await;
        handle.borrow_mut().next_page();

        {
            let mut c = handle.borrow_mut();
            assert!(c.open_edit("15"));
            c.set_field("name", DraftValue::Text("Penthouse".into()));
        }
        let outcome = submit(&handle, &api).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(api.list_calls.get(), 2);
        let c = handle.borrow();
        assert!(!c.editor().is_open());
        assert_eq!(c.page_index(), 2);
        assert!(c.visible_rows().iter().any(|r| r.name == "Penthouse"));
        assert_eq!(api.saves.borrow()[0].0.as_deref(), Some("15"));
    }

    #[tokio::test]
    async fn created_row_appears_after_refetch() {
        let handle = handle();
        let api = server(rooms(2));
        refresh(&handle, &api).await;
        {
            let mut c = handle.borrow_mut();
            c.open_create();
            c.set_field("roomCode", DraftValue::Text("FAM".into()));
            c.set_field("name", DraftValue::Text("Family".into()));
            c.set_field("maxOccupancy", DraftValue::Text("4".into()));
        }
        assert_eq!(submit(&handle, &api).await, Ok(SubmitOutcome::Saved));

        let c = handle.borrow();
        let created = c.store().rows().iter().find(|r| r.room_code == "FAM").cloned().unwrap();
        assert_eq!(created.max_occupancy, 4);
        assert_eq!(created.hotel_id.as_deref(), Some("H1"));
        assert_eq!(created.created_by.as_deref(), Some("night.audit"));
    }

    #[tokio::test]
    async fn rejected_save_keeps_dialog_open_without_refetch() {
        let handle = handle();
        let api = FakeServer {
            reject_with: Some(ApiError::http(400, "Room code must be unique")),
            ..server(vec![room(1, "STD", "Standard")])
        };
        refresh(&handle, &api).await;
        handle.borrow_mut().open_edit("1");

        let outcome = submit(&handle, &api).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed("Room code must be unique".into()));
        assert_eq!(api.list_calls.get(), 1);
        let c = handle.borrow();
        assert!(c.editor().is_open());
        assert!(!c.editor().is_submitting());
        assert_eq!(c.editor().error(), Some("Room code must be unique"));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_server() {
        let handle = handle();
        let api = server(Vec::new());
        handle.borrow_mut().open_create();

        let err = submit(&handle, &api).await.unwrap_err();
        assert!(matches!(err, ListError::Validation(_)));
        assert!(api.saves.borrow().is_empty());
        assert_eq!(api.list_calls.get(), 0);
        assert!(handle.borrow().editor().is_open());
    }

    #[tokio::test]
    async fn out_of_order_responses_keep_the_latest_request() {
        let handle = handle();
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let api = GatedApi {
            pending: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };

        let (first, second, ()) = tokio::join!(refresh(&handle, &api), refresh(&handle, &api), async {
            second_tx.send(Ok(vec![room(2, "NEW", "Issued last")])).unwrap();
            tokio::task::yield_now().await;
            first_tx.send(Ok(vec![room(1, "OLD", "Issued first")])).unwrap();
        });

        assert_eq!(first, Some(FetchOutcome::Stale));
        assert_eq!(second, Some(FetchOutcome::Applied));
        let c = handle.borrow();
        assert_eq!(c.store().rows()[0].room_code, "NEW");
        assert!(!c.loading());
    }

    #[tokio::test]
    async fn unmounted_page_issues_nothing() {
        let api = server(rooms(1));
        assert_eq!(refresh(&Unmounted, &api).await, None);
        assert_eq!(submit(&Unmounted, &api).await, Err(ListError::NotEditing));
        assert_eq!(api.list_calls.get(), 0);
    }
}
