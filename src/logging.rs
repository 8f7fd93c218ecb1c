//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging with a default filter level.
///
/// `RUST_LOG` still wins over the default when it is set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = Env::default().default_filter_or(default_level);
    // Integration tests may initialize more than once in one process.
    let _ = env_logger::Builder::from_env(env).try_init();
}
