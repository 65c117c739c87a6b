//! Tests for the environment-variable configuration cascade.
//!
//! These tests mutate the `N8N_*` process variables, so they live in
//! their own test binary and serialize on a lock.

use rcore::WebhookConfig;
use rcore::config::{
    DEFAULT_TIMEOUT_MS, ENV_API_KEY, ENV_JOB_SEARCH_WEBHOOK_URL, ENV_TIMEOUT, ENV_WEBHOOK_URL,
};
use remora_n8n::{JobQueryTool, JobSearchTool};
use std::sync::Mutex;
use std::time::Duration;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn set(name: &str, value: &str) {
    unsafe { std::env::set_var(name, value) }
}

fn clear_all() {
    for name in [
        ENV_WEBHOOK_URL,
        ENV_JOB_SEARCH_WEBHOOK_URL,
        ENV_API_KEY,
        ENV_TIMEOUT,
    ] {
        unsafe { std::env::remove_var(name) }
    }
}

#[test]
fn construction_fails_without_any_endpoint() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();

    let err = JobSearchTool::new(WebhookConfig::new()).unwrap_err();
    assert!(err.to_string().starts_with("configuration:"));

    let err = JobQueryTool::new(WebhookConfig::new()).unwrap_err();
    assert!(err.to_string().starts_with("configuration:"));
}

#[test]
fn override_flag_allows_missing_endpoint() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();

    assert!(JobSearchTool::new(WebhookConfig::new().allow_missing_endpoint()).is_ok());
    assert!(JobQueryTool::new(WebhookConfig::new().allow_missing_endpoint()).is_ok());
}

#[test]
fn endpoint_resolves_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://env.example/hook");

    let tool = JobSearchTool::new(WebhookConfig::new()).unwrap();
    assert_eq!(tool.endpoint(), "https://env.example/hook");

    clear_all();
}

#[test]
fn explicit_endpoint_beats_environment_for_structured() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://env.example/hook");

    let config = WebhookConfig::new().endpoint_url("https://explicit.example/hook");
    let tool = JobSearchTool::new(config).unwrap();
    assert_eq!(tool.endpoint(), "https://explicit.example/hook");

    clear_all();
}

#[test]
fn query_specific_variable_beats_generic() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://generic.example/hook");
    set(ENV_JOB_SEARCH_WEBHOOK_URL, "https://specific.example/hook");

    let tool = JobQueryTool::new(WebhookConfig::new()).unwrap();
    assert_eq!(tool.endpoint(), "https://specific.example/hook");

    clear_all();
}

#[test]
fn environment_beats_explicit_for_free_text() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://generic.example/hook");

    let config = WebhookConfig::new().endpoint_url("https://explicit.example/hook");
    let tool = JobQueryTool::new(config).unwrap();
    assert_eq!(tool.endpoint(), "https://generic.example/hook");

    clear_all();
}

#[test]
fn free_text_falls_back_to_explicit_endpoint() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();

    let config = WebhookConfig::new().endpoint_url("https://explicit.example/hook");
    let tool = JobQueryTool::new(config).unwrap();
    assert_eq!(tool.endpoint(), "https://explicit.example/hook");
}

#[test]
fn timeout_resolves_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://env.example/hook");
    set(ENV_TIMEOUT, "5000");

    let tool = JobSearchTool::new(WebhookConfig::new()).unwrap();
    assert_eq!(tool.timeout(), Duration::from_millis(5000));

    clear_all();
}

#[test]
fn explicit_timeout_beats_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://env.example/hook");
    set(ENV_TIMEOUT, "5000");

    let tool = JobSearchTool::new(WebhookConfig::new().timeout_ms(100)).unwrap();
    assert_eq!(tool.timeout(), Duration::from_millis(100));

    clear_all();
}

#[test]
fn unparseable_timeout_uses_the_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_all();
    set(ENV_WEBHOOK_URL, "https://env.example/hook");
    set(ENV_TIMEOUT, "soon");

    let tool = JobSearchTool::new(WebhookConfig::new()).unwrap();
    assert_eq!(tool.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));

    clear_all();
}
