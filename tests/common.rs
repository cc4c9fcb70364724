use async_trait::async_trait;
use chapmagic_api::adapters::mail::{MailError, Mailer};
use chapmagic_api::api;
use chapmagic_api::config::{ContactConfig, ServerConfig};
use chapmagic_api::domain::contact::OutboundMessage;
use chapmagic_api::services::contact_service::ContactService;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::{SystemTime, UNIX_EPOCH};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("chapmagic_api=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// Fake delivery provider: records every message and can be flipped into a
/// failing mode to simulate provider outages.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::Provider("status 500: simulated outage".into()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub url: String,
    pub client: reqwest::Client,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_destination("dest@example.com").await
    }

    pub async fn spawn_with_destination(destination: &str) -> Self {
        setup_tracing();

        let contact = ContactConfig {
            form_destination_email: destination.to_string(),
            form_sender: "ChapMagic Web <onboarding@resend.dev>".to_string(),
        };
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // 0 means let OS choose
            request_timeout_secs: 30,
        };

        let mailer = Arc::new(RecordingMailer::default());
        let service = ContactService::new(&contact, Arc::clone(&mailer) as Arc<dyn Mailer>);
        let router = api::app_router(&server, service);

        let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { url: format!("http://{addr}"), client: reqwest::Client::new(), mailer }
    }

    pub async fn post_submission(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client.post(format!("{}/api/send-email", self.url)).json(body).send().await.unwrap()
    }
}

pub fn now_ms() -> i64 {
    i64::try_from(SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis()).unwrap()
}

/// A submission that passes every check: honeypot empty, timestamp well in
/// the past, all required fields present.
pub fn valid_payload() -> serde_json::Value {
    json!({
        "name": "Ana",
        "email": "ana@example.com",
        "message": "Hola",
        "website": "",
        "_timestamp": (now_ms() - 10_000).to_string(),
    })
}
