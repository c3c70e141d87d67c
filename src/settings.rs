// Server setting payloads
//
// The dashboard stores serverSetting values as a superjson-style envelope,
// {"json": {...}}, with camelCase field names.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    json: T,
}

/// Telemetry preferences, everything switched off.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsSettings {
    enable_general: bool,
    enable_widget_data: bool,
    enable_integration_data: bool,
    enable_user_data: bool,
}

/// Search engine visibility preferences, fully opted out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CrawlingSettings {
    no_index: bool,
    no_follow: bool,
    no_translate: bool,
    no_site_links_search_box: bool,
}

pub fn analytics_disabled() -> Result<String> {
    let settings = AnalyticsSettings {
        enable_general: false,
        enable_widget_data: false,
        enable_integration_data: false,
        enable_user_data: false,
    };
    serde_json::to_string(&Envelope { json: settings })
        .context("Failed to serialize analytics settings")
}

pub fn crawling_opt_out() -> Result<String> {
    let settings = CrawlingSettings {
        no_index: true,
        no_follow: true,
        no_translate: true,
        no_site_links_search_box: true,
    };
    serde_json::to_string(&Envelope { json: settings })
        .context("Failed to serialize crawling settings")
}
