use contracts::shared::list_resource::{ControllerHandle, ListController, ListResource};
use leptos::prelude::*;

/// Reactive home of a `ListController`.
///
/// Responses that arrive after the page is disposed find the signal gone and are dropped.
pub struct ControllerSignal<R: ListResource>(pub RwSignal<ListController<R>>);

impl<R: ListResource> Clone for ControllerSignal<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ControllerSignal<R> {}

impl<R: ListResource> ControllerSignal<R> {
    pub fn new(controller: ListController<R>) -> Self {
        Self(RwSignal::new(controller))
    }

    /// Tracked read
    pub fn read<O>(&self, f: impl FnOnce(&ListController<R>) -> O) -> O {
        self.0.with(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut ListController<R>)) {
        self.0.update(f);
    }
}

impl<R: ListResource> ControllerHandle<R> for ControllerSignal<R> {
    fn with_controller<O>(&self, f: impl FnOnce(&mut ListController<R>) -> O) -> Option<O> {
        self.0.try_update(f)
    }
}
