mod cli;

use std::io::{BufRead, Write};

use tracing_subscriber::EnvFilter;

use confab_ai::{Session, TogetherClient, TogetherConfig};

const DEFAULT_SYSTEM_PROMPT: &str = "You are a concise helpful assistant.";

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let candidates = [
        // Workspace root — two levels up from crates/confab-cli/
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("confab=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "confab=info".parse().unwrap()),
            ),
        )
        .init();

    let config = match TogetherConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let provider = TogetherClient::new(config);

    let system_prompt = match &args.system_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => contents.trim_end().to_string(),
            Err(e) => {
                tracing::warn!("Failed to read system file {path}: {e}, using default");
                DEFAULT_SYSTEM_PROMPT.to_string()
            }
        },
        None => DEFAULT_SYSTEM_PROMPT.to_string(),
    };

    let mut session = Session::new().with_system_message(system_prompt);
    if let Some(model) = args.model {
        session = session.with_model(model);
    }
    if let Some(temperature) = args.temperature {
        session = session.with_temperature(temperature);
    }

    tracing::info!(model = session.model(), "Confab session started");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("User: ");
        let _ = std::io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            // EOF or a broken stdin ends the session
            _ => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        session.push_user(input);
        match session.generate(&provider, false).await {
            Ok(reply) => println!("AI: {reply}"),
            Err(e) => tracing::error!("Generation failed: {e}"),
        }
    }

    tracing::info!("Session ended");
}
