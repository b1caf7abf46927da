use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use parasail_tts::{ClientConfig, ParasailTTS, SUPPORTED_LANGUAGES, create_tts_provider};

/// Parasail TTS - synthesize speech and check credentials
#[derive(Parser, Debug)]
#[command(name = "parasail-tts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synthesize text and write the audio to a file
    Speak {
        /// Text to synthesize
        text: String,

        /// Output file path (defaults to output.<format>)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Voice override
        #[arg(long)]
        voice: Option<String>,

        /// Language of the text
        #[arg(long, default_value = "en")]
        language: String,
    },

    /// Check that an API key can synthesize
    Validate {
        /// API key to check (defaults to the configured key)
        #[arg(long = "api-key")]
        api_key: Option<String>,

        /// Voice to validate with
        #[arg(long)]
        voice: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration from file or environment
    let config = if let Some(config_path) = cli.config {
        info!("Loading configuration from {}", config_path.display());
        ClientConfig::from_file(&config_path).map_err(|e| anyhow!(e.to_string()))?
    } else {
        ClientConfig::from_env().map_err(|e| anyhow!(e.to_string()))?
    };

    match cli.command {
        Commands::Speak {
            text,
            output,
            voice,
            language,
        } => {
            if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
                warn!(
                    "Language '{}' is not supported (supported: {:?}); synthesizing anyway",
                    language, SUPPORTED_LANGUAGES
                );
            }

            let tts_config = match voice {
                Some(ref v) => config.tts_config_with_voice(v),
                None => config.tts_config(),
            };
            let tts = create_tts_provider(&config.provider, tts_config)?;
            info!("Synthesizing with {}", tts.name());

            let audio = tts
                .synthesize(&text)
                .await
                .context("Speech synthesis failed")?;

            let path = output.unwrap_or_else(|| PathBuf::from(format!("output.{}", audio.format)));
            tokio::fs::write(&path, &audio.data)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;

            println!(
                "Wrote {} bytes of {} audio to {}",
                audio.data.len(),
                audio.format,
                path.display()
            );
        }
        Commands::Validate { api_key, voice } => {
            let api_key = api_key
                .or_else(|| config.api_key.clone())
                .ok_or_else(|| anyhow!("No API key given; pass --api-key or set PARASAIL_API_KEY"))?;

            // Validation always runs against the streaming endpoint
            let mut tts_config = config.tts_config();
            if config.is_buffered() {
                tts_config.api_url = None;
            }
            let tts = ParasailTTS::new(tts_config)?;
            match tts.validate_credentials(&api_key, voice.as_deref()).await {
                Ok(info) => println!("{}", info.title),
                Err(e) => anyhow::bail!("{e}"),
            }
        }
    }

    Ok(())
}
