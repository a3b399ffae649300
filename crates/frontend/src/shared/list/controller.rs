use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};

use super::debounce::Debouncer;
use super::envelope::ListPayload;
use super::query::ListQuery;
use super::state::{FetchSeq, ListState};
use super::ListEntity;
use crate::shared::api_error::ApiError;
use crate::shared::entity_cache::EntityCache;
use crate::shared::notify::Notifications;
use crate::system::auth::context::AuthState;
use crate::system::auth::permissions;

/// Quiet period between the last keystroke and the search fetch.
const SEARCH_DEBOUNCE_MS: u32 = 300;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T>>>;
type FetchFn<T> =
    Rc<dyn Fn(ListQuery, Option<AbortSignal>) -> BoxFuture<Result<ListPayload<T>, ApiError>>>;
type DeleteFn = Rc<dyn Fn(String) -> BoxFuture<Result<(), ApiError>>>;

/// Collaborators and per-resource settings for a [`ListController`].
#[derive(Clone, Copy)]
pub struct ListControllerOptions {
    pub page_size: usize,
    /// Entity-cache key prefix, e.g. `"category"`.
    pub entity_kind: &'static str,
    /// Permission required by `delete_item`; checked before any request.
    pub delete_permission: &'static str,
    pub cache: EntityCache,
    pub notifications: Notifications,
    pub auth: ReadSignal<AuthState>,
}

/// One paginated, searchable, cancelable collection view.
///
/// The controller owns the fetch lifecycle: it normalizes whatever the
/// endpoint returns, decides between server-side and client-side pagination,
/// and keeps the view consistent across deletes. Fetches are
/// last-request-wins: starting a new one aborts and invalidates whatever is
/// still in flight, so a slow stale response can never overwrite a newer
/// page.
pub struct ListController<T: ListEntity> {
    pub state: RwSignal<ListState<T>>,
    fetch: StoredValue<FetchFn<T>, LocalStorage>,
    delete: StoredValue<DeleteFn, LocalStorage>,
    seq: StoredValue<FetchSeq>,
    abort: StoredValue<Option<AbortController>, LocalStorage>,
    debounce: Debouncer,
    opts: ListControllerOptions,
}

impl<T: ListEntity> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListEntity> Copy for ListController<T> {}

impl<T: ListEntity> ListController<T> {
    pub fn new<F, FFut, D, DFut>(fetch: F, delete: D, opts: ListControllerOptions) -> Self
    where
        F: Fn(ListQuery, Option<AbortSignal>) -> FFut + 'static,
        FFut: Future<Output = Result<ListPayload<T>, ApiError>> + 'static,
        D: Fn(String) -> DFut + 'static,
        DFut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let fetch: FetchFn<T> = Rc::new(move |query, signal| Box::pin(fetch(query, signal)));
        let delete: DeleteFn = Rc::new(move |id| Box::pin(delete(id)));
        let controller = Self {
            state: RwSignal::new(ListState::new(opts.page_size)),
            fetch: StoredValue::new_local(fetch),
            delete: StoredValue::new_local(delete),
            seq: StoredValue::new(FetchSeq::default()),
            abort: StoredValue::new_local(None),
            debounce: Debouncer::new(SEARCH_DEBOUNCE_MS),
            opts,
        };
        // tearing the view down must cancel whatever is still in flight
        on_cleanup(move || controller.cancel_in_flight());
        controller
    }

    /// First load, safe to call from an effect that may rerun.
    pub fn ensure_loaded(&self) {
        if !self.state.with_untracked(|s| s.is_loaded || s.loading) {
            self.fetch_page(1);
        }
    }

    /// Issue the read for `page` with the current search text. Supersedes
    /// any in-flight fetch for this view.
    pub fn fetch_page(&self, page: usize) {
        let token = match self.seq.try_update_value(|seq| seq.begin()) {
            Some(token) => token,
            None => return, // view already disposed
        };

        if let Some(Some(prev)) = self.abort.try_get_value() {
            prev.abort();
        }
        let abort_controller = AbortController::new().ok();
        let signal = abort_controller.as_ref().map(|c| c.signal());
        self.abort.try_update_value(|slot| *slot = abort_controller);

        let query = match self
            .state
            .try_with_untracked(|s| ListQuery::new(page, s.page_size, &s.search_text))
        {
            Some(query) => query,
            None => return,
        };
        self.state.try_update(|s| s.loading = true);

        let fut = self.fetch.with_value(|fetch| fetch(query, signal));
        let this = *self;
        spawn_local(async move {
            let result = fut.await;

            // commit gate: only the latest request may touch state
            let is_current = this
                .seq
                .try_get_value()
                .is_some_and(|seq| seq.is_current(token));
            if !is_current {
                return;
            }

            match result {
                Ok(payload) => {
                    for row in &payload.rows {
                        if let Ok(value) = serde_json::to_value(row) {
                            this.opts
                                .cache
                                .insert(this.opts.entity_kind, row.entity_id(), value);
                        }
                    }
                    this.state.try_update(|s| s.apply_page(payload, page));
                }
                Err(err) if err.is_cancelled() => {
                    // superseded request, nothing to report
                }
                Err(err) => {
                    log::error!("list fetch failed ({}): {}", this.opts.entity_kind, err);
                    this.state.try_update(|s| s.apply_fetch_error());
                    this.opts
                        .notifications
                        .notify_error("Не удалось загрузить данные");
                }
            }
        });
    }

    /// Navigate to page `n`. Out-of-bounds targets, the current page and
    /// navigation while loading are silent no-ops. Client mode re-slices
    /// without touching the network.
    pub fn go_to_page(&self, n: usize) {
        let (allowed, client_mode) = self
            .state
            .with_untracked(|s| (s.can_go_to(n), s.is_client_paginated()));
        if !allowed {
            return;
        }
        if client_mode {
            self.state.update(|s| s.reslice(n));
        } else {
            self.fetch_page(n);
        }
    }

    /// Update the filter; the refetch of page 1 happens after the debounce
    /// window, and only for the last value typed.
    pub fn set_search_text(&self, text: String) {
        self.state.update(|s| s.set_search(text));
        let this = *self;
        self.debounce.schedule(move || this.fetch_page(1));
    }

    pub fn set_page_size(&self, page_size: usize) {
        if self.state.with_untracked(|s| s.is_client_paginated()) {
            self.state.update(|s| s.apply_page_size(page_size));
        } else {
            self.state.update(|s| {
                s.page_size = page_size.max(1);
                s.page = 1;
            });
            self.fetch_page(1);
        }
    }

    pub fn refresh(&self) {
        let page = self.state.with_untracked(|s| s.page);
        self.fetch_page(page);
    }

    /// Delete one row and resynchronize.
    ///
    /// The permission gate runs before any request leaves the client. On
    /// success the row disappears immediately and a fetch of page 1 brings
    /// totals back in line with the server; on failure nothing changes
    /// locally and the most specific server message is surfaced.
    pub fn delete_item(&self, id: String) {
        let auth = self.opts.auth.get_untracked();
        if !permissions::has_permission(&auth, self.opts.delete_permission) {
            self.opts
                .notifications
                .notify_error("Недостаточно прав для удаления");
            return;
        }

        let fut = self.delete.with_value(|delete| delete(id.clone()));
        let this = *self;
        spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    this.state.try_update(|s| s.remove_item(&id));
                    this.opts.cache.remove(this.opts.entity_kind, &id);
                    this.opts.notifications.notify_success("Запись удалена");
                    this.fetch_page(1);
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    this.opts.notifications.notify_error(err.to_string());
                }
            }
        });
    }

    fn cancel_in_flight(&self) {
        self.seq.try_update_value(|seq| seq.invalidate());
        if let Some(Some(controller)) = self.abort.try_get_value() {
            controller.abort();
        }
        self.debounce.cancel();
    }
}
