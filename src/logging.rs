use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Covers both the library and the
/// `smart_meal` binary targets.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "smart_meal_rs=debug,smart_meal=debug,info"
    } else {
        "smart_meal_rs=info,smart_meal=info,warn"
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Output goes to stderr so it never mixes with the
/// rendered meal on stdout.
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_binary() {
        for verbose in [false, true] {
            let directive = default_directive(verbose);
            assert!(EnvFilter::try_new(directive).is_ok());
            assert!(directive.contains("smart_meal_rs="));
            assert!(directive.contains("smart_meal="));
        }
        assert!(default_directive(false).contains("smart_meal=info"));
        assert!(default_directive(true).contains("smart_meal=debug"));
    }
}
