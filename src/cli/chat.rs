//! Line-oriented chat loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::chatbot::Chatbot;
use crate::config::CleverbotConfig;
use crate::error::Result;
use crate::official::Client;
use crate::unofficial::Session;

use super::ChatArgs;

/// Build the backend selected by `args`, layered over env configuration.
pub async fn connect(args: &ChatArgs) -> Result<Box<dyn Chatbot>> {
    let env = CleverbotConfig::from_env();

    if args.official {
        let config = CleverbotConfig::builder()
            .maybe_api_key(args.api_key.clone().or(env.api_key))
            .api_base_url(args.base_url.clone().unwrap_or(env.api_base_url))
            .history_cap(env.history_cap)
            .build();
        let mut client = Client::from_config(config)?;
        if let Some(v) = args.wackiness {
            client.set_wackiness(v);
        }
        if let Some(v) = args.talkativeness {
            client.set_talkativeness(v);
        }
        if let Some(v) = args.attentiveness {
            client.set_attentiveness(v);
        }
        Ok(Box::new(client))
    } else {
        let config = CleverbotConfig::builder()
            .base_url(args.base_url.clone().unwrap_or(env.base_url))
            .history_cap(env.history_cap)
            .build();
        Ok(Box::new(Session::new(config).await?))
    }
}

/// Ask one question per input line and print each answer.
///
/// Blank lines are skipped. Stops at end of input or on the first error.
pub async fn run<R, W>(bot: &mut dyn Chatbot, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        let answer = bot.ask(question).await?;
        output
            .write_all(format!("Cleverbot: {answer}\n").as_bytes())
            .await?;
        output.flush().await?;
    }
    Ok(())
}
