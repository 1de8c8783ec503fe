//! HTTP Client Factory
//!
//! Builds the blocking reqwest client used for webhook delivery.

use reqwest::blocking::Client;

use crate::models::settings::ProxyConfig;
use crate::utils::error::{NotifyError, NotifyResult};

/// Build a blocking `reqwest` client with the resolved proxy configuration.
///
/// - `Some(proxy)` -> route all traffic through the proxy
/// - `None` -> explicitly disable proxies (`no_proxy`), ignoring env vars
pub fn build_http_client(proxy: Option<&ProxyConfig>) -> NotifyResult<Client> {
    let mut builder = Client::builder();
    match proxy {
        Some(cfg) => {
            let mut p = reqwest::Proxy::all(&cfg.url)
                .map_err(|e| NotifyError::config(format!("Invalid proxy url {}: {}", cfg.url, e)))?;
            if let (Some(u), Some(pw)) = (&cfg.username, &cfg.password) {
                p = p.basic_auth(u, pw);
            }
            builder = builder.proxy(p);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    Ok(builder.build()?)
}
