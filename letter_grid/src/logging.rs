// logging.rs - tracing-subscriber setup
//
// info: startup settings, animation start/pause, grid resets
// debug: one event per animation tick
// trace: manual cell toggles
//
// RUST_LOG wins over the --log-level default when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{LetterGridError, Result};

pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|err| LetterGridError::Logging(err.to_string()))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|err| LetterGridError::Logging(err.to_string()))
}
