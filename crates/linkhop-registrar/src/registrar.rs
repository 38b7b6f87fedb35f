use crate::error::Result;
use crate::input::{read_token, Token};
use linkhop_core::{normalize_long_url, ReadRegistry, Registry, ShortCode, UrlRecord};
use linkhop_generator::Generator;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const LONG_URL_PROMPT: &str = "Enter long URL: ";
const SHORT_CODE_PROMPT: &str = "Enter custom short URL (optional): ";

#[derive(Debug, Clone, TypedBuilder)]
pub struct RegistrarConfig {
    /// Prefix of the short URLs shown after each registration.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    base_url: String,
}

impl RegistrarConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Registers long URLs typed at the console.
///
/// Custom codes are stored as typed and silently replace whatever was
/// registered under the same code. Without a custom code the generator
/// numbers the registration from the current table size.
#[derive(Debug, Clone)]
pub struct Registrar<R, G> {
    registry: R,
    generator: G,
    config: RegistrarConfig,
}

impl<R: Registry, G: Generator> Registrar<R, G> {
    pub fn new(registry: R, generator: G, config: RegistrarConfig) -> Self {
        Self {
            registry,
            generator,
            config,
        }
    }

    /// Normalizes `long_url`, picks the short code and stores the pair.
    ///
    /// An empty `custom_code` means "generate one".
    pub async fn register(&self, long_url: &str, custom_code: &str) -> ShortCode {
        let original_url = normalize_long_url(long_url);

        let code: ShortCode = if custom_code.is_empty() {
            let occupied = ReadRegistry::len(&self.registry).await;
            self.generator.generate(occupied).into()
        } else {
            ShortCode::new(custom_code)
        };

        let replaced = self
            .registry
            .insert(&code, UrlRecord::new(original_url.as_str()))
            .await;
        if let Some(previous) = replaced {
            debug!(code = %code, previous_url = %previous.original_url, "replaced existing short code");
        }

        info!(code = %code, url = %original_url, "registered short code");
        code
    }

    /// Runs the prompt loop until `input` is exhausted.
    ///
    /// Read failures count as blank answers. Failing to write to `output`
    /// ends the loop with an error.
    pub async fn run<I, O>(&self, mut input: I, mut output: O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        loop {
            prompt(&mut output, LONG_URL_PROMPT).await?;
            let long_url = match read_token(&mut input).await {
                Token::Value(value) => value,
                Token::Eof => break,
            };

            prompt(&mut output, SHORT_CODE_PROMPT).await?;
            // The long URL is already in hand, so a missing answer here still
            // registers it; the next prompt notices the end of input.
            let custom_code = match read_token(&mut input).await {
                Token::Value(value) => value,
                Token::Eof => String::new(),
            };

            let code = self.register(&long_url, &custom_code).await;
            let short_url = code.to_url(self.config.base_url());
            output
                .write_all(format!("Your short URL is: {short_url}\n\n").as_bytes())
                .await?;
            output.flush().await?;
        }

        debug!("console input closed, stopping registration loop");
        Ok(())
    }
}

async fn prompt<O>(output: &mut O, text: &str) -> Result<()>
where
    O: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
