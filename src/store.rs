//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::MovieDraft;
use crate::models::Movie;

/// Page-lifetime session state, owned by the root component
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Last successfully loaded list, in server order
    pub movies: Vec<Movie>,
    /// Edit/create dialog
    pub form_mode: FormMode,
    /// Text currently in the dialog fields
    pub draft: MovieDraft,
    /// Record shown in the detail dialog
    pub viewing: Option<Movie>,
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u32,
    /// Requests in flight
    pub pending: u32,
}

pub type CatalogStore = Store<CatalogState>;

// ========================
// Form Dialog
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Add,
    Edit(u32),
    Cancel,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(u32),
}

impl FormMode {
    /// Next mode, or `None` when the event is not valid from here
    pub fn apply(self, event: FormEvent) -> Option<FormMode> {
        match (self, event) {
            (FormMode::Closed, FormEvent::Add) => Some(FormMode::Create),
            (FormMode::Closed, FormEvent::Edit(id)) => Some(FormMode::Edit(id)),
            (FormMode::Create | FormMode::Edit(_), FormEvent::Cancel | FormEvent::Saved) => Some(FormMode::Closed),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        self != FormMode::Closed
    }

    /// The editing-target id
    pub fn editing_id(self) -> Option<u32> {
        match self {
            FormMode::Edit(id) => Some(id),
            _ => None,
        }
    }

    pub fn submit_target(self) -> Option<SubmitTarget> {
        match self {
            FormMode::Closed => None,
            FormMode::Create => Some(SubmitTarget::Create),
            FormMode::Edit(id) => Some(SubmitTarget::Update(id)),
        }
    }
}

// ========================
// Notices
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// Unnumbered notice; the store assigns the id when it is shown
    pub fn success(text: impl Into<String>) -> Self {
        Self { id: 0, kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { id: 0, kind: NoticeKind::Error, text: text.into() }
    }
}

/// Clear `current` only if it is still the notice with `id`
pub fn dismiss_notice(current: &mut Option<Notice>, id: u32) -> bool {
    if current.as_ref().map(|n| n.id) == Some(id) {
        *current = None;
        true
    } else {
        false
    }
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice, replacing any other; returns its id
pub fn store_show_notice(store: &CatalogStore, mut notice: Notice) -> u32 {
    store.notice_seq().update(|seq| *seq = seq.wrapping_add(1));
    let id = store.notice_seq().get_untracked();
    notice.id = id;
    store.notice().set(Some(notice));
    id
}

pub fn store_dismiss_notice(store: &CatalogStore, id: u32) {
    store.notice().update(|current| {
        dismiss_notice(current, id);
    });
}

/// Apply a dialog event; returns false when the transition is rejected
pub fn store_form_event(store: &CatalogStore, event: FormEvent) -> bool {
    match store.form_mode().get_untracked().apply(event) {
        Some(next) => {
            store.form_mode().set(next);
            true
        }
        None => {
            web_sys::console::log_1(&format!("[STORE] Ignored {:?} in {:?}", event, store.form_mode().get_untracked()).into());
            false
        }
    }
}

pub fn store_begin_request(store: &CatalogStore) {
    store.pending().update(|pending| *pending += 1);
}

pub fn store_end_request(store: &CatalogStore) {
    store.pending().update(|pending| *pending = pending.saturating_sub(1));
}
