//! Log output setup.

use std::io::Write;

/// Install the global logger.
///
/// Defaults to `warn`; set `RUST_LOG=debug` to trace each pipeline stage.
/// Records are written to stderr as `[LEVEL file:line] message`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}:{}] {}",
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
