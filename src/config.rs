use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub contact: ContactConfig,

    #[command(flatten)]
    pub mail: MailConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "CHAPMAGIC_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CHAPMAGIC_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Upper bound on total request handling time in seconds
    #[arg(long, env = "CHAPMAGIC_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct ContactConfig {
    /// Address contact-form submissions are delivered to
    #[arg(long, env = "CHAPMAGIC_FORM_DESTINATION_EMAIL")]
    pub form_destination_email: String,

    /// Fixed sender identity for outbound contact mail
    #[arg(
        long,
        env = "CHAPMAGIC_FORM_SENDER",
        default_value = "ChapMagic Web <onboarding@resend.dev>"
    )]
    pub form_sender: String,
}

#[derive(Clone, Debug, Args)]
pub struct MailConfig {
    /// Resend API key used to authenticate sends
    #[arg(long, env = "RESEND_API_KEY")]
    pub resend_api_key: String,

    /// Base URL of the Resend API (overridable for tests)
    #[arg(long, env = "CHAPMAGIC_RESEND_API_URL", default_value = "https://api.resend.com")]
    pub resend_api_url: String,

    /// Timeout for a single provider send in seconds
    #[arg(long, env = "CHAPMAGIC_SEND_TIMEOUT_SECS", default_value_t = 5)]
    pub send_timeout_secs: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "CHAPMAGIC_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
