use beeclust_core::config::BeeClustConfig;
use tracing::debug;

/// Returns false for configurations that should be discarded.
pub(super) fn is_valid_config(config: &BeeClustConfig) -> bool {
    match config.validate() {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "discarding parameter combination");
            false
        }
    }
}
