//! Contact and sell-car form mailer for the Autosalon website.

use anyhow::Result;
use clap::Parser;
use salon_core::config::{MailConfig, ServerConfig};
use salon_core::{HttpMailer, LeadNotifier, LogMailer, MailSettings, Mailer};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "contact-form")]
#[command(about = "Lead form mailer")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "PORT", default_value = "8081")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Address that receives lead notifications
    #[arg(long, env = "RECIPIENT_EMAIL", default_value = MailConfig::DEFAULT_RECIPIENT)]
    recipient_email: String,

    /// Sender address on outgoing notifications
    #[arg(long, env = "SENDER_EMAIL", default_value = MailConfig::DEFAULT_SENDER)]
    sender_email: String,

    /// Transactional mail API endpoint; notifications are only logged when unset
    #[arg(long, env = "MAIL_API_URL")]
    mail_api_url: Option<String>,

    /// Bearer token for the mail API
    #[arg(long, env = "MAIL_API_KEY", hide_env_values = true)]
    mail_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    salon_server::init_tracing(args.debug);

    info!("Starting lead form mailer");

    let settings = MailSettings {
        recipient: args.recipient_email,
        sender: args.sender_email,
    };
    info!("Notifications go to {}", settings.recipient);

    let mailer: Arc<dyn Mailer> = match args.mail_api_url {
        Some(url) => Arc::new(HttpMailer::new(url, args.mail_api_key, settings)?),
        None => {
            warn!("MAIL_API_URL not set; notifications will only be logged");
            Arc::new(LogMailer::new(settings))
        }
    };

    let addr =
        salon_server::start_contact_server(LeadNotifier::new(mailer), &args.host, args.port)
            .await?;
    info!("Contact form ready at http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    Ok(())
}
