use std::str::FromStr;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

pub fn parse_level(level: &str) -> anyhow::Result<Level> {
    Level::from_str(level).map_err(|_| anyhow::anyhow!("invalid log level '{}'", level))
}

pub fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .init();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }
}
