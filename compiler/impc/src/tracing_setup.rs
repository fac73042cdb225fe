use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Environment variable holding the log filter, e.g. `IMP_LOG=imp_eval=trace`.
pub const LOG_ENV: &str = "IMP_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `IMP_LOG` is set.
///
/// Output is an indented span tree on stderr. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV);
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);
        // Another subscriber may already be installed by an embedder.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
