//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the default filter passed in. Initialization happens
//! at most once per process; every call, including concurrent ones, sees the
//! outcome of that first attempt.

use crate::error::{BoardError, Result};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALIZED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Installs a formatted tracing subscriber
pub fn init_logging(default_filter: &str) -> Result<()> {
    INITIALIZED
        .get_or_init(|| install(default_filter))
        .clone()
        .map_err(BoardError::Other)
}

fn install(default_filter: &str) -> std::result::Result<(), String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|err| format!("invalid log filter '{}': {}", default_filter, err))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|err| format!("failed to install tracing subscriber: {}", err))?;

    tracing::debug!("logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_init_is_idempotent() {
        init_logging("debug").unwrap();
        init_logging("debug").unwrap();
        assert_eq!(INITIALIZED.get(), Some(&Ok(())));
    }

    #[test]
    fn test_concurrent_init_all_succeed() {
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    init_logging("debug")
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}
