use leptos::logging::log;
use std::panic;

/// Forwards panics to the browser console and adds a hint when the panic comes
/// from touching a reactive value whose owner was already disposed.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if is_disposed_owner(&message) {
            log!("[PANIC] A signal was used after its owner was disposed. Likely causes:");
            log!("[PANIC] 1. A card's preloaded image finished after the page was replaced");
            log!("[PANIC] 2. A page-size commit fired after the input was unmounted");
            log!("[PANIC] 3. A fetch cycle published after the museum page was torn down");
        }
    }));
}

fn is_disposed_owner(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Call once from the client entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
