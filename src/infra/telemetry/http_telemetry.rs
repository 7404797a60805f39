use crate::domain::ports::{PageParameters, TelemetryChannel, TelemetryEvent};
use reqwest::Client;
use serde::Serialize;
use tracing::warn;

pub struct HttpTelemetry {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpTelemetry {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct TrackPayload {
    event: &'static str,
    properties: PageParameters,
}

impl TelemetryChannel for HttpTelemetry {
    fn track(&self, event: TelemetryEvent, params: PageParameters) {
        let payload = TrackPayload {
            event: event.as_str(),
            properties: params,
        };
        let request = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload);

        // Fire and forget: tracking must never gate a page response.
        tokio::spawn(async move {
            match request.send().await {
                Ok(res) if !res.status().is_success() => {
                    warn!("Telemetry endpoint returned status {}", res.status());
                }
                Err(e) => {
                    warn!("Telemetry delivery failed: {}", e);
                }
                _ => {}
            }
        });
    }
}
