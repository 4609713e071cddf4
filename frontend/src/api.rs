use gloo_net::http::Request;
use shared::analytics::{AnalyticsEvent, CallToAction, EventSink};
use shared::constants::{ANALYTICS_EVENTS_ENDPOINT, CONFIG_ENDPOINT};
use shared::ClientConfig;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use crate::config::api_url;

pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    let response = Request::get(&api_url(CONFIG_ENDPOINT))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Error parsing config response: {:?}", e))
}

pub async fn post_event(event: &AnalyticsEvent) -> Result<(), String> {
    let response = Request::post(&api_url(ANALYTICS_EVENTS_ENDPOINT))
        .json(event)
        .map_err(|e| format!("Error encoding event: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("Error status: {}", response.status()))
    }
}

/// Posts analytics in the background. Failures are logged to the console and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpEventSink;

impl EventSink for HttpEventSink {
    fn record(&self, event: AnalyticsEvent) {
        spawn_local(async move {
            if let Err(e) = post_event(&event).await {
                log::warn!("Analytics event {} dropped: {}", event.event_type, e);
            }
        });
    }
}

/// Logs the click, then leaves for the sign-up page whether or not the log succeeded.
pub fn follow_call_to_action(cta: CallToAction, redirect_url: String) {
    spawn_local(async move {
        if let Err(e) = post_event(&AnalyticsEvent::call_to_action(cta)).await {
            log::warn!("Analytics event {} dropped: {}", cta.event_type(), e);
        }
        redirect(&redirect_url);
    });
}

fn redirect(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Redirect to {} failed: {:?}", url, e);
        }
    }
}
