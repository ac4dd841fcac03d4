use std::panic;

/// Routes panic reports through `tracing` so they show up in the structured
/// log stream instead of raw stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        error!("{info}");
    }));
}
