use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter (e.g. `loom_dom=trace`).
pub(crate) const LOG_ENV: &str = "LOOM_LOG";

/// Install the stderr subscriber.
///
/// `-v` forces `debug` and `-vv` forces `trace`; otherwise the filter comes
/// from `LOOM_LOG`, defaulting to `warn`.
pub(crate) fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!(%error, "keeping the log subscriber that is already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init(0);
        init(2);
        tracing::debug!("still logging after a second init");
    }
}
