use storefront_chat_assistant::{chat::ChatSession, config::Settings};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let settings = Settings::from_env()?;

    // Logs go to stderr so the conversation stays readable on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    info!("Storefront chat starting");

    let classifier = settings.build_classifier()?;
    let mut session = ChatSession::with_classifier(classifier);

    if let Some(welcome) = session.last_message() {
        println!("bot> {}", welcome.text);
    }
    print_quick_reply(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }

        let Some(result) = session.send(&line) else {
            continue;
        };

        info!(
            intent = %result.intent,
            matched_keyword = ?result.matched_keyword,
            "Reply sent"
        );
        println!("bot> {}", result.reply);
        print_quick_reply(&session);
    }

    info!(messages = session.message_count(), "Chat ended");
    Ok(())
}

fn print_quick_reply(session: &ChatSession) {
    if let Some(quick_reply) = session.quick_reply() {
        println!("     [{}]", quick_reply.label);
    }
}
