//! Catalog Context
//!
//! Store, configuration and the user actions that drive them, provided to
//! every component via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::config::{CatalogConfig, EntryPolicy};
use crate::error::ClientError;
use crate::flow::{self, Action, MutationStep};
use crate::form::MovieDraft;
use crate::models::Movie;
use crate::store::*;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub store: CatalogStore,
    config: StoredValue<CatalogConfig>,
}

/// Get the catalog context provided by `App`
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}

impl CatalogContext {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            store: Store::new(CatalogState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    // ========================
    // Load
    // ========================

    /// Reload the list in the background
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            let _ = ctx.load_now().await;
        });
    }

    /// Fetch the full list and replace the local copy; on failure the copy is emptied
    async fn load_now(&self) -> Result<(), ClientError> {
        let config = self.config();
        self.store.notice().set(None);
        store_begin_request(&self.store);

        let result = api::list_movies(&config).await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        match &result {
            Ok(movies) => web_sys::console::log_1(&format!("[CATALOG] Loaded {} movies", movies.len()).into()),
            Err(err) => web_sys::console::error_1(&format!("[CATALOG] Load failed: {}", err).into()),
        }

        let (movies, notice) = flow::settle_load(result, &config.api_base_url);
        self.store.movies().set(movies);
        self.notify(notice);

        store_end_request(&self.store);
        outcome
    }

    // ========================
    // Form Dialog
    // ========================

    pub fn open_create(&self) {
        if store_form_event(&self.store, FormEvent::Add) {
            self.store.draft().set(MovieDraft::default());
        }
    }

    pub fn open_edit(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            if let Some(movie) = ctx.fetch_for_entry(id).await {
                if store_form_event(&ctx.store, FormEvent::Edit(id)) {
                    ctx.store.draft().set(MovieDraft::from_movie(&movie));
                }
            }
        });
    }

    pub fn cancel_form(&self) {
        store_form_event(&self.store, FormEvent::Cancel);
    }

    /// Send the draft as a create or update, depending on the dialog mode
    pub fn submit(&self) {
        let Some(target) = self.store.form_mode().get_untracked().submit_target() else {
            return;
        };
        let payload = self.store.draft().get_untracked().to_payload();
        let ctx = *self;

        spawn_local(async move {
            let config = ctx.config();
            store_begin_request(&ctx.store);

            let result = match target {
                SubmitTarget::Create => api::create_movie(&config, &payload).await,
                SubmitTarget::Update(id) => api::update_movie(&config, id, &payload).await,
            };
            web_sys::console::log_1(&format!("[CATALOG] Submit {:?}: {:?}", target, result).into());

            match flow::settle_mutation(Action::Save, result) {
                MutationStep::Reload(notice) => {
                    let reloaded = ctx.load_now().await;
                    store_form_event(&ctx.store, FormEvent::Saved);
                    if reloaded.is_ok() {
                        ctx.notify_opt(notice);
                    }
                }
                MutationStep::Fail(notice) => ctx.notify(notice),
            }

            store_end_request(&ctx.store);
        });
    }

    // ========================
    // Detail Dialog
    // ========================

    pub fn open_view(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            if let Some(movie) = ctx.fetch_for_entry(id).await {
                ctx.store.viewing().set(Some(movie));
            }
        });
    }

    pub fn close_view(&self) {
        self.store.viewing().set(None);
    }

    // ========================
    // Delete
    // ========================

    /// Called after the user confirmed
    pub fn delete(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            let config = ctx.config();
            store_begin_request(&ctx.store);

            let result = api::delete_movie(&config, id).await;
            web_sys::console::log_1(&format!("[CATALOG] Delete #{}: {:?}", id, result).into());

            match flow::settle_mutation(Action::Delete, result) {
                MutationStep::Reload(notice) => {
                    if ctx.load_now().await.is_ok() {
                        ctx.notify_opt(notice);
                    }
                }
                MutationStep::Fail(notice) => ctx.notify(notice),
            }

            store_end_request(&ctx.store);
        });
    }

    // ========================
    // Notices
    // ========================

    pub fn dismiss_notice(&self, id: u32) {
        store_dismiss_notice(&self.store, id);
    }

    fn notify_opt(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.notify(notice);
        }
    }

    fn notify(&self, notice: Notice) {
        let id = store_show_notice(&self.store, notice);
        let timeout = self.config.with_value(|c| c.notice_timeout_ms);
        if timeout == 0 {
            return;
        }
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_notice(&store, id);
        });
    }

    // ========================
    // Helpers
    // ========================

    /// Record for edit/view under the configured entry policy; errors become a notice
    async fn fetch_for_entry(&self, id: u32) -> Option<Movie> {
        let result = match self.config.with_value(|c| c.entry_policy) {
            EntryPolicy::Cached => self.store.movies().with_untracked(|movies| flow::find_movie(movies, id)),
            EntryPolicy::Refresh => {
                let config = self.config();
                store_begin_request(&self.store);
                let result = api::get_movie(&config, id).await;
                store_end_request(&self.store);
                result
            }
        };

        match result {
            Ok(movie) => Some(movie),
            Err(err) => {
                web_sys::console::error_1(&format!("[CATALOG] Open #{} failed: {}", id, err).into());
                self.notify(flow::failure_notice(Action::Open, &err));
                None
            }
        }
    }
}
