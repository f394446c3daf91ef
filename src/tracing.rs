use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "kira_labreport=info";

/// Logs go to stderr; stdout is reserved for report output.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "kira_labreport=debug"
        } else {
            DEFAULT_FILTER
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
