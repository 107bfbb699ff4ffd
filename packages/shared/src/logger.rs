//! Logging setup utilities for the Yoriai binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Workspace crates whose events are enabled by the default filter.
const WORKSPACE_CRATES: [&str; 3] = ["yoriai_shared", "yoriai_server", "yoriai_client"];

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default filter enables every workspace crate plus the binary itself.
/// It can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "yoriai-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use yoriai_shared::logger::setup_logger;
///
/// setup_logger("yoriai-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the filter directive used when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    WORKSPACE_CRATES
        .iter()
        .copied()
        .chain(std::iter::once(binary_name))
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_and_binary() {
        // テスト項目: デフォルトフィルタがワークスペースのクレートとバイナリを含む
        // given (前提条件):
        let binary_name = "yoriai-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert_eq!(
            filter,
            "yoriai_shared=debug,yoriai_server=debug,yoriai_client=debug,yoriai_server=debug"
        );
    }

    #[test]
    fn test_default_filter_normalizes_hyphens() {
        // テスト項目: バイナリ名のハイフンがアンダースコアに変換される
        // given (前提条件):
        let binary_name = "my-tool";

        // when (操作):
        let filter = default_filter(binary_name, "info");

        // then (期待する結果):
        assert!(filter.ends_with("my_tool=info"));
        assert!(!filter.contains('-'));
    }
}
