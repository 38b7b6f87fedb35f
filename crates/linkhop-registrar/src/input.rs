use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Outcome of reading one answer from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The first whitespace-delimited word of the line; empty for a blank
    /// line or a failed read.
    Value(String),
    /// The input is exhausted.
    Eof,
}

/// Reads one line and keeps its first whitespace-delimited word.
///
/// A blank line is how the user skips an optional answer. Read errors are
/// not distinguished from blank input.
pub async fn read_token<R>(reader: &mut R) -> Token
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    match reader.read_line(&mut line).await {
        Ok(0) => Token::Eof,
        Ok(_) => Token::Value(first_word(&line)),
        Err(err) => {
            warn!(error = %err, "failed to read console input, treating it as empty");
            Token::Value(String::new())
        }
    }
}

fn first_word(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_owned()
}
