//! storefront-subscribe - sign an email address up for the newsletter
//!
//! Drives the same form the landing page mounts, without a screen: the
//! address is typed, blurred and submitted, then the scheduled transitions
//! are awaited.

use std::io::{self, IsTerminal};

use clap::Parser;
use libstorefront::logging::LoggingConfig;
use libstorefront::service::events::{EventReceiver, FormEvent};
use libstorefront::service::StorefrontService;
use libstorefront::{
    Config, Result, StorefrontError, SubmissionStatus, SubscriptionForm, ValidationError,
};
use tokio::runtime::Handle;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "storefront-subscribe")]
#[command(version, about = "Subscribe an email address to the storefront newsletter")]
#[command(long_about = r#"Subscribe an email address to the storefront newsletter.

The address goes through the landing page's signup form: it is validated,
submitted, and the command returns once the form reports success.

EXAMPLES:
    # Subscribe an address
    storefront-subscribe user@example.com

    # Read the address from stdin
    echo "user@example.com" | storefront-subscribe

    # Every form event as JSON lines
    storefront-subscribe user@example.com --format json

    # Skip the simulated latency and stay until the form is idle again
    storefront-subscribe user@example.com --submit-delay-ms 0 --wait-reset

OUTPUT FORMATS:
    text - "subscribed: <email>" on success (default)
    json - one form event per line

EXIT CODES:
    0 - Subscribed
    1 - Submission or runtime failure
    2 - Configuration error
    3 - The address was rejected by validation
"#)]
struct Cli {
    /// Email address (reads from stdin if not provided)
    email: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Simulated submission latency in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    submit_delay_ms: Option<u64>,

    /// Wait until the success notice expires and the form is idle again
    #[arg(long)]
    wait_reset: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Stderr logging; quiet unless asked otherwise
fn init_logging(verbose: bool) {
    let mut logging = LoggingConfig::default();
    if std::env::var_os("STOREFRONT_LOG_LEVEL").is_none() {
        logging.level = "error".to_string();
    }
    logging.verbose = verbose;
    logging.init();
}

async fn run(cli: Cli) -> Result<()> {
    let email = match cli.email {
        Some(email) => email,
        None => read_stdin()?,
    };

    let mut config = Config::load()?;
    if let Some(ms) = cli.submit_delay_ms {
        config.form.submit_delay_ms = ms;
    }

    let json = cli.format == "json";
    let service = StorefrontService::from_config(config);
    let mut events = service.subscribe();
    let mut form = service.mount_form(Handle::current());
    debug!(form_id = %form.id(), wait_reset = cli.wait_reset, "Driving form");

    form.input(email);
    form.blur();
    form.submit();
    print_events(&mut events, json)?;

    if form.status() == SubmissionStatus::Idle {
        return Err(rejection(&form));
    }

    let mut subscribed = false;
    while form.next_scheduled().await.is_some() {
        print_events(&mut events, json)?;

        match form.status() {
            SubmissionStatus::Success => {
                subscribed = true;
                if !cli.wait_reset {
                    break;
                }
            }
            SubmissionStatus::Idle if !subscribed => return Err(rejection(&form)),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
        }
    }

    if subscribed {
        info!(form_id = %form.id(), "Subscription complete");
        Ok(())
    } else {
        Err(StorefrontError::Runtime("form finished without subscribing".to_string()))
    }
}

/// First line of stdin, refusing to wait on an interactive terminal
fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(StorefrontError::InvalidInput(
            "No email address given (pass it as an argument or pipe it on stdin)".to_string(),
        ));
    }

    let mut line = String::new();
    stdin
        .read_line(&mut line)
        .map_err(|e| StorefrontError::Runtime(format!("Failed to read stdin: {}", e)))?;
    Ok(line)
}

/// Error for a form that came back to idle without subscribing
fn rejection(form: &SubscriptionForm) -> StorefrontError {
    if let Some(error) = form.last_failure() {
        return StorefrontError::Submission(error.clone());
    }
    match &form.state().error {
        Some(error) => StorefrontError::InvalidInput(error.message().to_string()),
        None => StorefrontError::InvalidInput(ValidationError::Malformed.message().to_string()),
    }
}

/// Print what the form published since the last call
///
/// Text mode only reports the subscription; json mode prints every event.
fn print_events(events: &mut EventReceiver, json: bool) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        if json {
            let line = serde_json::to_string(&event)
                .map_err(|e| StorefrontError::Runtime(format!("Failed to encode event: {}", e)))?;
            println!("{}", line);
        } else if let FormEvent::Subscribed { email, .. } = &event {
            println!("subscribed: {}", email);
        }
    }
    Ok(())
}
