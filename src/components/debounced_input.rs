use leptos::logging::log;
use leptos::*;

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::utils::debounce::Debouncer;

/// Text field that echoes every keystroke immediately but only reports the
/// value through `on_change` once typing has paused for `debounce_delay` ms.
///
/// Mounting does not report anything; a pending report is dropped when a new
/// keystroke arrives, when the delay changes, or when the field is unmounted.
#[component]
pub fn DebouncedInput(
    /// Initial text of the field.
    #[prop(into)]
    value: String,
    on_change: Callback<String>,
    #[prop(into, default = DEFAULT_DEBOUNCE_MS.into())]
    debounce_delay: MaybeSignal<u32>,
    #[prop(into, optional)]
    disabled: MaybeSignal<bool>,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let (buffer, set_buffer) = create_signal(value);
    let debouncer = store_value(Debouncer::new());

    create_effect(move |armed: Option<()>| {
        let text = buffer.get();
        let delay = debounce_delay.get();
        if armed.is_none() {
            return;
        }
        debouncer.update_value(|pending| {
            pending.schedule(delay, move || {
                log!("[DEBOUNCE] Committing {:?}", text);
                on_change.call(text);
            })
        });
    });

    on_cleanup(move || {
        debouncer.try_update_value(Debouncer::cancel);
    });

    view! {
        <input
            type="text"
            class=class
            prop:value=buffer
            disabled=move || disabled.get()
            on:input=move |ev| set_buffer.set(event_target_value(&ev))
        />
    }
}
