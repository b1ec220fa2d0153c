use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. html5ever reports every malformed
/// tag it recovers from, so it is kept at error level.
pub fn filter_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bass_results_etl={},html5ever=error,selectors=warn,warn", level)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)));

    // verbose 模式顯示來源位置，方便追查是哪一列解析失敗
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(verbose)
                .compact(),
        )
        .init();
}
