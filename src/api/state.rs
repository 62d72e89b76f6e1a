//! Application state for the derivation API.

use std::sync::Arc;

use crate::config::{ConfigLoader, DisplayConfig};

/// Shared application state.
///
/// Holds the loaded display configuration. Handlers only read it, so it is
/// shared behind an `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the display configuration.
    pub fn display(&self) -> &DisplayConfig {
        self.config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_and_send() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_display_reads_loaded_config() {
        let mut display = DisplayConfig::default();
        display.currency.symbol = "$".to_string();

        let state = AppState::new(ConfigLoader::from_config(display));
        assert_eq!(state.display().currency.symbol, "$");
    }
}
