use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, Registry};

/// Handle for changing the log level once configuration is loaded
pub type LogHandle = reload::Handle<LevelFilter, Registry>;

/// Level used until configuration has been read
pub fn bootstrap_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Build the fmt subscriber with a reloadable level filter
pub fn log_subscriber<W>(verbose: bool, make_writer: W) -> (impl Subscriber + Send + Sync, LogHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(bootstrap_level(verbose));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer));

    (subscriber, handle)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use clap::Parser;
    use tracing::info;

    use super::*;
    use crate::cli::{App, Args};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let captured = Captured::default();
        let writer = captured.clone();
        let (subscriber, _handle) = log_subscriber(false, move || writer.clone());

        let missing = PathBuf::from("/nonexistent/fanjoin/missing.toml");
        let args = Args::try_parse_from(["fanjoin", "--config", missing.to_str().unwrap(), "config"]).unwrap();

        let app = tracing::subscriber::with_default(subscriber, || App::new(args));

        assert!(app.is_ok());
        let logs = captured.contents();
        assert!(logs.contains("Specified configuration file not found"), "{}", logs);
        assert!(logs.contains("missing.toml"), "{}", logs);
    }

    #[test]
    fn test_configured_level_applies_after_load() {
        let captured = Captured::default();
        let writer = captured.clone();
        let (subscriber, handle) = log_subscriber(false, move || writer.clone());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        let args = Args::try_parse_from(["fanjoin", "--config", path.to_str().unwrap(), "config"]).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            let app = App::new(args).unwrap();
            app.apply_log_level(&handle).unwrap();
            info!("suppressed after reload");
            tracing::warn!("still visible");
        });

        let logs = captured.contents();
        assert!(logs.contains("Loading user configuration"), "{}", logs);
        assert!(!logs.contains("suppressed after reload"), "{}", logs);
        assert!(logs.contains("still visible"), "{}", logs);
    }

    #[test]
    fn test_verbose_keeps_debug_level() {
        assert_eq!(bootstrap_level(true), LevelFilter::DEBUG);
        assert_eq!(bootstrap_level(false), LevelFilter::INFO);
    }
}
