//! Console logging.
//!
//! On wasm32 `log` records go to the browser console through `console_log`. Host
//! builds (native tests) install no backend, so log macros are no-ops there.

use log::{Level, LevelFilter};

/// Install the console backend at `level`. A second call only adjusts the level.
pub fn init(level: Level) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(level);
    }
    set_level(level.to_level_filter());
}

pub fn set_level(filter: LevelFilter) {
    log::set_max_level(filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_on_host_only_sets_the_level() {
        init(Level::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        // no backend on the host: must not reach browser APIs
        log::debug!("host logging is a no-op");
        set_level(LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
