//! Interactive command-line dialogue.
//!
//! Reads one user turn per line from stdin and prints the reply. `/reset`
//! starts over, `/state` prints the exported conversation state and `/quit`
//! exits.

use std::sync::Arc;

use socratic_architect::adapters::{InMemoryDomainContextStore, InMemoryKnowledgeStore};
use socratic_architect::application::{DialogueController, DialogueSettings};
use socratic_architect::config::AppConfig;
use socratic_architect::domain::discovery::DomainDiscoveryEngine;
use socratic_architect::domain::foundation::SessionId;
use socratic_architect::telemetry;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = telemetry::init_tracing(&config.logging) {
        eprintln!("Warning: failed to initialize tracing: {}", e);
    }

    let discovery = Arc::new(DomainDiscoveryEngine::new(
        Arc::new(InMemoryDomainContextStore::new()),
        Arc::new(InMemoryKnowledgeStore::new()),
        config.discovery_settings(),
    ));
    let session_id = SessionId::generate();
    tracing::info!(session_id = %session_id, "Starting Socratic Architect");

    let mut controller = DialogueController::new(session_id, discovery, DialogueSettings::from(&config));
    println!("{}", controller.greet().message);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read from stdin");
                break;
            }
        };

        match line.trim() {
            "/quit" => break,
            "/reset" => {
                controller.reset().await;
                println!("{}", controller.greet().message);
            }
            "/state" => match controller.export_state() {
                Ok(document) => println!("{}", document),
                Err(e) => eprintln!("Failed to export state: {}", e),
            },
            input => println!("\n{}\n", controller.process_user_input(input).await.message),
        }
    }
}
