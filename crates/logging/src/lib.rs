//! Logger setup shared by the tempo binaries.
use std::io::Write;

use log::LevelFilter;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Log to stderr.
///
/// `RUST_LOG` is honored; without it, everything at info and above is shown.  The timer logs per-frame detail at
/// debug and trace, so `RUST_LOG=tempo_timer=trace` is the way to watch it work.
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        env_logger::builder()
            .filter_level(LevelFilter::Info)
            .parse_default_env()
            .format(|buf, record| {
                let now = OffsetDateTime::now_utc();
                let stamp = now.format(&Rfc3339).unwrap_or_else(|_| now.to_string());

                writeln!(
                    buf,
                    "{} {:<5} target={} {}",
                    stamp,
                    record.level(),
                    record.target(),
                    record.args(),
                )
            })
            .init();
    });
}
