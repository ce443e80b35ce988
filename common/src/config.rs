//! 設定管理
//!
//! ServerConfig, UiConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// データベースURL (デフォルト: "sqlite://radarweb.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// 疎通確認タイムアウト（秒）(デフォルト: 5)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://radarweb.db".to_string()
}

fn default_probe_timeout() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            probe_timeout_secs: default_probe_timeout(),
        }
    }
}

/// UIモジュール設定
///
/// 描画先やAPIの接続先はモジュール定数ではなく設定として渡す。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 消費するREST APIのベースURL (デフォルト: "http://127.0.0.1:8000")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// ファビコン代替取得サービスのプレフィックス
    #[serde(default = "default_favicon_service")]
    pub favicon_service: String,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_favicon_service() -> String {
    "https://www.google.com/s2/favicons?domain=".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            favicon_service: default_favicon_service(),
        }
    }
}
