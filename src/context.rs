//! Todo Context
//!
//! Shared handle provided via Leptos Context API: the view-model plus the
//! store it feeds.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpGateway;
use crate::config::TOAST_MILLIS;
use crate::store::{store_apply_snapshot, store_push_toast, store_remove_toast, TodoStore};
use crate::view_model::{ModelEvent, TodoListModel};

pub type AppModel = TodoListModel<HttpGateway>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Not `Send`; kept in local arena storage
    model: StoredValue<Rc<AppModel>, LocalStorage>,
    pub store: TodoStore,
}

impl TodoContext {
    /// Wire model events into the store
    pub fn new(model: Rc<AppModel>, store: TodoStore) -> Self {
        let ctx = Self {
            model: StoredValue::new_local(model.clone()),
            store,
        };
        model.subscribe(move |event| ctx.on_event(event));
        store_apply_snapshot(&store, model.snapshot());
        ctx
    }

    fn model(&self) -> Option<Rc<AppModel>> {
        self.model.try_get_value()
    }

    fn on_event(&self, event: ModelEvent) {
        match event {
            ModelEvent::Changed => {
                if let Some(model) = self.model() {
                    store_apply_snapshot(&self.store, model.snapshot());
                }
            }
            ModelEvent::Notify(notification) => {
                let id = store_push_toast(&self.store, &notification);
                let ctx = *self;
                spawn_local(async move {
                    TimeoutFuture::new(TOAST_MILLIS).await;
                    ctx.dismiss_toast(id);
                });
            }
        }
    }

    /// Load the list (no-op while fresh)
    pub fn refresh(&self) {
        if let Some(model) = self.model() {
            spawn_local(async move { model.refresh().await });
        }
    }

    pub fn initialize(&self) {
        if let Some(model) = self.model() {
            spawn_local(async move { model.initialize().await });
        }
    }

    pub fn submit(&self) {
        if let Some(model) = self.model() {
            spawn_local(async move { model.submit().await });
        }
    }

    pub fn update_draft(&self, text: String) {
        if let Some(model) = self.model() {
            model.update_draft(text);
        }
    }

    /// Remove a toast; the outcome it reported is settled, so the mutation
    /// goes back to idle
    pub fn dismiss_toast(&self, toast_id: u32) {
        store_remove_toast(&self.store, toast_id);
        if let Some(model) = self.model() {
            model.reset_mutation();
        }
    }

    /// Stop forwarding events; in-flight requests finish into the void
    pub fn detach(&self) {
        if let Some(model) = self.model() {
            model.unsubscribe();
        }
    }
}
