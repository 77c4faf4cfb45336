//! Delete Confirm Button Component

use leptos::prelude::*;

/// Card delete action that asks before firing.
///
/// The first click swaps the button for a prompt naming the movie; `on_confirm`
/// runs only from the prompt's ✓.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] movie_title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = delete_prompt(&movie_title);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }>"✓"</button>
                    <button class="cancel-btn" on:click=move |_| set_asking.set(false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="btn btn-delete btn-small" on:click=move |_| set_asking.set(true)>"Delete"</button>
            }
            .into_any()
        }
    }
}

fn delete_prompt(title: &str) -> String {
    format!("Delete \"{}\"?", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_movie() {
        assert_eq!(delete_prompt("Alien"), "Delete \"Alien\"?");
    }
}
