//! Shared test harness for billing-console integration tests.

use billing_console::config::{
    LicensingServiceSettings, ServerSettings, Settings, UsageServiceSettings,
};
use billing_console::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on an ephemeral port.
    ///
    /// Upstream URLs point at a port that was just bound and released,
    /// so routes that need an upstream fail fast with a refused
    /// connection instead of hanging.
    pub async fn spawn() -> Self {
        let reserved = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to reserve port");
        let upstream = format!(
            "http://127.0.0.1:{}",
            reserved.local_addr().unwrap().port()
        );
        drop(reserved);

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            licensing_service: LicensingServiceSettings {
                url: upstream.clone(),
                api_token: None,
            },
            usage_service: UsageServiceSettings {
                url: upstream,
            },
            service_name: "billing-console".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(app.run_until_stopped());

        Self { address }
    }
}
