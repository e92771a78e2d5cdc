use env_logger::Env;

/// Initialise `env_logger` for a binary.
///
/// `--debug` lowers the default filter from `warn` to `debug`; an explicit
/// `RUST_LOG` always wins.
pub fn init_logging(debug: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(debug)))
        .format_timestamp(None)
        .try_init();
}

fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "debug");
        assert_eq!(default_filter(false), "warn");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
