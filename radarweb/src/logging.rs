//! ロギング初期化
//!
//! tracing-subscriberのfmtレイヤーをenv-filter付きで構成する

use tracing_subscriber::EnvFilter;

/// デフォルトのログフィルター
const DEFAULT_FILTER: &str = "radarweb=info,tower_http=warn";

/// グローバルのtracingサブスクライバーを初期化
///
/// `RUST_LOG` が設定されていればそれを優先する。
pub fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {}", e))?;

    Ok(())
}
