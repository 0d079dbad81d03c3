//! Asks one question of the configured web endpoint and prints the raw answer.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use alexa_gpt::adapters::query::FormQuestionClient;
use alexa_gpt::application::AskQuestionHandler;
use alexa_gpt::bootstrap::StartupError;
use alexa_gpt::config::AppConfig;
use alexa_gpt::telemetry::{init_tracing, LogFormat};

fn read_question() -> io::Result<String> {
    print!("Enter your question: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    let _ = init_tracing(&config.server, LogFormat::Text);
    config.query.validate()?;

    let question = read_question()?;

    let handler = AskQuestionHandler::new(
        Arc::new(FormQuestionClient::new(config.query.url.clone())),
        config.query.delay(),
    );
    let answer = handler.handle(&question).await?;

    println!("Answer: {}", answer);
    Ok(())
}
