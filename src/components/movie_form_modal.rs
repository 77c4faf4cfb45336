//! Movie Form Modal Component
//!
//! Create/edit dialog bound to the store's draft and form mode.

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::form::DraftField;
use crate::store::{CatalogStateStoreFields, FormMode};

/// Field, label, input type, step
const FIELDS: &[(DraftField, &str, &str, &str)] = &[
    (DraftField::Name, "Name", "text", ""),
    (DraftField::Category, "Category", "text", ""),
    (DraftField::Year, "Year", "number", "1"),
    (DraftField::Director, "Director", "text", ""),
    (DraftField::Duration, "Duration (minutes)", "number", "1"),
    (DraftField::Rating, "Rating (0-10)", "number", "0.1"),
];

#[component]
pub fn MovieFormModal() -> impl IntoView {
    let ctx = use_catalog();
    let mode = move || ctx.store.form_mode().get();

    let title = move || match mode() {
        FormMode::Edit(_) => "Edit Movie",
        _ => "Add New Movie",
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <div class=move || if mode().is_open() { "modal active" } else { "modal" }>
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="close-btn" on:click=move |_| ctx.cancel_form()>"×"</button>
                </div>
                <form class="movie-form" on:submit=on_submit>
                    {FIELDS.iter().map(|&(field, label, input_type, step)| {
                        // only this field's text, so typing elsewhere leaves the input alone
                        let value = Memo::new(move |_| ctx.store.draft().with(|d| d.get(field).to_string()));
                        view! {
                            <div class="form-group">
                                <label>{label}</label>
                                <input
                                    type=input_type
                                    step={(!step.is_empty()).then_some(step)}
                                    min={(field == DraftField::Rating).then_some("0")}
                                    max={(field == DraftField::Rating).then_some("10")}
                                    required={field == DraftField::Name}
                                    prop:value=move || value.get()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        ctx.store.draft().update(|d| d.set(field, value));
                                    }
                                />
                            </div>
                        }
                    }).collect_view()}
                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctx.cancel_form()>"Cancel"</button>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
