//! Interactive terminal chat over the completion API.
//!
//! `exit`, `quit` or end of input leaves the loop.

use std::io::{self, BufRead, Write};

use alexa_gpt::application::ChatSession;
use alexa_gpt::bootstrap::{completion_bridge, StartupError};
use alexa_gpt::config::AppConfig;
use alexa_gpt::telemetry::{init_tracing, LogFormat};

fn prompt_line(stdin: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("User: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    let _ = init_tracing(&config.server, LogFormat::Text);
    config.ai.validate(config.is_production())?;

    let mut chat = ChatSession::new(completion_bridge(&config.ai)?);
    tracing::debug!(conversation_id = %chat.conversation().id(), "chat started");

    let mut stdin = io::stdin().lock();
    while let Some(line) = prompt_line(&mut stdin)? {
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let reply = chat.respond(&line).await;
        println!("Assistant: {}", reply);
    }

    Ok(())
}
