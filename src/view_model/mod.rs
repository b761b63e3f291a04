//! Todo List View-Model
//!
//! Owns the UI-observable state (cached list, query and mutation status,
//! draft input) and drives the gateway. Rendering-agnostic: the view
//! subscribes to [`ModelEvent`]s and reads [`TodoSnapshot`]s.
//!
//! All state lives behind a `RefCell`; borrows are always released before
//! an `.await` so overlapping calls on the same model are safe.


use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::api::TodoGateway;
use crate::clock::{Clock, SystemClock};
use crate::config::{CacheUpdate, TodoConfig};
use crate::models::{ListStatus, MutationStatus, NewTodo, Todo};
use crate::query::{QueryCache, TODOS_KEY};

/// Non-blocking user-facing message
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    TodoAdded(Todo),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// Snapshot changed; re-read it
    Changed,
    Notify(Notification),
}

/// Copy of the state the view renders from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoSnapshot {
    pub todos: Vec<Todo>,
    pub list_status: ListStatus,
    /// A list fetch is in flight (including background refetches)
    pub is_fetching: bool,
    pub mutation_status: MutationStatus,
    pub draft: String,
}

#[derive(Default)]
struct ModelState {
    cache: QueryCache<Vec<Todo>>,
    list_status: ListStatus,
    mutation_status: MutationStatus,
    draft: String,
}

type Listener = Rc<dyn Fn(ModelEvent)>;

pub struct TodoListModel<G> {
    gateway: G,
    config: TodoConfig,
    clock: Rc<dyn Clock>,
    state: RefCell<ModelState>,
    listener: RefCell<Option<Listener>>,
}

impl<G: TodoGateway> TodoListModel<G> {
    pub fn new(gateway: G, config: TodoConfig) -> Self {
        Self::with_clock(gateway, config, Rc::new(SystemClock))
    }

    pub fn with_clock(gateway: G, config: TodoConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            gateway,
            config,
            clock,
            state: RefCell::new(ModelState::default()),
            listener: RefCell::new(None),
        }
    }

    /// Replace the event listener
    pub fn subscribe(&self, listener: impl Fn(ModelEvent) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Drop the listener; later events go nowhere
    pub fn unsubscribe(&self) {
        self.listener.borrow_mut().take();
    }

    fn emit(&self, event: ModelEvent) {
        // Released before the call so a listener may (un)subscribe
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(event);
        }
    }

    pub fn snapshot(&self) -> TodoSnapshot {
        let state = self.state.borrow();
        TodoSnapshot {
            todos: state.cache.data(TODOS_KEY).cloned().unwrap_or_default(),
            list_status: state.list_status.clone(),
            is_fetching: state.cache.is_fetching(TODOS_KEY),
            mutation_status: state.mutation_status.clone(),
            draft: state.draft.clone(),
        }
    }

    /// Load the list unless a fetch is in flight or the cached list is fresh
    pub async fn initialize(&self) {
        let now = self.clock.now();
        {
            let mut state = self.state.borrow_mut();
            if !state.cache.should_fetch(TODOS_KEY, now, self.config.stale_time) {
                debug!("[TODOS] List is fresh or already loading, skipping fetch");
                return;
            }
            state.cache.begin_fetch(TODOS_KEY);
            // Stale data stays on screen during a background refetch
            if state.cache.data(TODOS_KEY).is_none() {
                state.list_status = ListStatus::Loading;
            }
        }
        self.emit(ModelEvent::Changed);

        let result = self.gateway.list_todos(self.config.page_size).await;

        {
            let mut state = self.state.borrow_mut();
            state.cache.finish_fetch(TODOS_KEY);
            match result {
                Ok(todos) => {
                    info!("[TODOS] Loaded {} todos", todos.len());
                    state.cache.set_data(TODOS_KEY, todos, self.clock.now());
                    state.list_status = ListStatus::Success;
                }
                Err(err) => {
                    warn!("[TODOS] List fetch failed: {}", err);
                    state.list_status = ListStatus::Error(err.to_string());
                }
            }
        }
        self.emit(ModelEvent::Changed);
    }

    /// Re-run the list query when stale (window focus, refresh button)
    pub async fn refresh(&self) {
        self.initialize().await;
    }

    pub fn update_draft(&self, text: impl Into<String>) {
        self.state.borrow_mut().draft = text.into();
        self.emit(ModelEvent::Changed);
    }

    /// Create a todo from the current draft.
    ///
    /// Ignored while a previous submission is pending. Empty drafts are sent
    /// as-is.
    pub async fn submit(&self) {
        let new_todo = {
            let mut state = self.state.borrow_mut();
            if state.mutation_status.is_pending() {
                debug!("[TODOS] Submit ignored, create already pending");
                return;
            }
            state.mutation_status = MutationStatus::Pending;
            NewTodo::open(state.draft.clone(), self.config.user_id)
        };
        self.emit(ModelEvent::Changed);

        match self.gateway.create_todo(&new_todo).await {
            Ok(todo) => {
                info!("[TODOS] Created todo {:?}", todo.id);
                let refetch = {
                    let mut state = self.state.borrow_mut();
                    let refetch = match self.config.cache_update {
                        CacheUpdate::PrependEcho => {
                            let created = todo.clone();
                            state.cache.update_data(TODOS_KEY, move |todos| todos.insert(0, created));
                            false
                        }
                        CacheUpdate::InvalidateAndRefetch => {
                            state.cache.invalidate(TODOS_KEY);
                            true
                        }
                    };
                    state.draft.clear();
                    state.mutation_status = MutationStatus::Success;
                    refetch
                };
                self.emit(ModelEvent::Changed);
                self.emit(ModelEvent::Notify(Notification::TodoAdded(todo)));
                if refetch {
                    self.initialize().await;
                }
            }
            Err(err) => {
                warn!("[TODOS] Create failed: {}", err);
                let message = err.to_string();
                self.state.borrow_mut().mutation_status = MutationStatus::Error(message.clone());
                self.emit(ModelEvent::Changed);
                self.emit(ModelEvent::Notify(Notification::Failed(message)));
            }
        }
    }

    /// Return a settled mutation to idle; no-op while pending
    pub fn reset_mutation(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.mutation_status.is_pending() {
                return;
            }
            state.mutation_status = MutationStatus::Idle;
        }
        self.emit(ModelEvent::Changed);
    }
}
