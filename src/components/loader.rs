use leptos::*;

/// Spinner shown in place of the list while a page is loading.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader__container">
            <div class="loader"></div>
        </div>
    }
}
