//! CLIインターフェース
//!
//! `-h`/`--help` と `-V`/`--version` のみを提供する。設定は環境変数で行う。

use clap::Parser;

/// RadarWeb - Website status monitor and bookmark manager
#[derive(Parser, Debug)]
#[command(name = "radarweb")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    RADARWEB_HOST                Bind address (default: 0.0.0.0)
    RADARWEB_PORT                Listen port (default: 8000)
    RADARWEB_DATABASE_URL        Database URL (default: sqlite:~/.radarweb/radarweb.db)
    RADARWEB_API_BASE_URL        REST API base URL consumed by the UI module
                                 (default: http://127.0.0.1:<port>)
    RADARWEB_PROBE_TIMEOUT_SECS  Status probe timeout in seconds (default: 5)
    RADARWEB_FAVICON_SERVICE     Favicon fallback service prefix
    RUST_LOG                     Log filter (default: radarweb=info,tower_http=warn)
"#)]
pub struct Cli {}
