pub mod debounce;
pub mod panic_hook;
