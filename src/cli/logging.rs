//! Diagnostic logging setup
//!
//! Logs are opt-in. User-facing messages go through the presenter, so the
//! subscriber stays silent unless `SERMON_GEN_LOG` or `--verbose` asks for it.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "SERMON_GEN_LOG";

/// Filter used when `SERMON_GEN_LOG` is unset
fn fallback_directive(verbose: bool) -> &'static str {
    if verbose {
        "sermon_gen=debug"
    } else {
        "off"
    }
}

/// Install the stderr subscriber. `SERMON_GEN_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(fallback_directive(verbose)));

    // a second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_unless_verbose() {
        assert_eq!(fallback_directive(false), "off");
        assert_eq!(fallback_directive(true), "sermon_gen=debug");
    }
}
