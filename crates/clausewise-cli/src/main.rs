mod display;
mod input;
mod session;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use clausewise_llm::{LlmConfig, OllamaClient};
use tracing_subscriber::EnvFilter;

use crate::input::Input;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "clausewise")]
#[command(about = "Plain-English risk analysis for contracts and terms & conditions")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse one document
    Analyze {
        /// Text file to analyse, or `-` for stdin
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        llm: LlmArgs,
    },
    /// Compare two documents clause by clause
    Compare {
        left: PathBuf,
        right: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        llm: LlmArgs,
    },
    /// Rank several documents from safest to riskiest
    Rank {
        /// Between 2 and 8 text files; extras are ignored
        #[arg(num_args = 2.., required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        llm: LlmArgs,
    },
    /// Check whether the language model server is reachable
    LlmStatus {
        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        llm: LlmArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print the result as JSON instead of a card
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LlmArgs {
    /// Ask the language model for plain-English commentary
    #[arg(long)]
    llm: bool,

    /// Ollama server URL
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = clausewise_llm::DEFAULT_BASE_URL)]
    ollama_url: String,

    /// Model name
    #[arg(long, env = "OLLAMA_MODEL", default_value = clausewise_llm::DEFAULT_MODEL)]
    ollama_model: String,

    /// Generation timeout in seconds
    #[arg(long, env = "OLLAMA_TIMEOUT", default_value_t = clausewise_llm::DEFAULT_TIMEOUT_SECS)]
    ollama_timeout: u64,

    /// Set to `false` to disable the language model entirely
    #[arg(long, env = "OLLAMA_ENABLED", default_value = "true")]
    ollama_enabled: String,
}

impl LlmArgs {
    fn client(&self) -> OllamaClient {
        OllamaClient::new(LlmConfig::new(
            &self.ollama_url,
            &self.ollama_model,
            self.ollama_timeout,
            !self.ollama_enabled.eq_ignore_ascii_case("false"),
        ))
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("clausewise v{}", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new()?;

    match cli.command {
        Commands::Analyze { file, output, llm } => {
            let doc = input::load(&file)?;
            let key = session.analyze(&doc)?;
            let result = session.analysis(&key)?;
            let insight = if llm.llm {
                Some(
                    llm.client()
                        .enhance(
                            &doc.text,
                            result.document_type.as_str(),
                            result.risk_level.as_str(),
                            result.risk_score,
                        )
                        .await,
                )
            } else {
                None
            };

            if output.json {
                let mut value = session.value(&key)?.clone();
                if let Some(insight) = &insight {
                    value["llm"] = serde_json::to_value(insight)?;
                }
                print_json(&value)?;
            } else {
                display::print_analysis_card(&doc.name, &result);
                if let Some(insight) = &insight {
                    println!();
                    display::print_insight(insight);
                }
            }
        }
        Commands::Compare {
            left,
            right,
            output,
            llm,
        } => {
            let left = input::load(&left)?;
            let right = input::load(&right)?;
            let key = session.compare(&left, &right)?;
            if llm.llm {
                let opinion = llm.client().compare_opinion(&session.comparison(&key)?).await;
                session.attach_opinion(&key, opinion)?;
            }

            if output.json {
                print_json(session.value(&key)?)?;
            } else {
                display::print_comparison_card(&session.comparison(&key)?);
            }
        }
        Commands::Rank { files, output, llm } => {
            let docs: Vec<Input> = input::load_many(&files)?;
            let key = session.rank(&docs)?;
            if llm.llm {
                let pick = llm.client().multi_compare_pick(&session.ranking(&key)?).await;
                session.attach_pick(&key, pick)?;
            }

            if output.json {
                print_json(session.value(&key)?)?;
            } else {
                display::print_ranking_card(&session.ranking(&key)?);
            }
        }
        Commands::LlmStatus { output, llm } => {
            let status = llm.client().status().await;
            if output.json {
                print_json(&status)?;
            } else {
                display::print_llm_status(&status);
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("encoding JSON output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rank_needs_two_files() {
        assert!(Cli::try_parse_from(["clausewise", "rank", "a.txt"]).is_err());
        let cli = Cli::try_parse_from(["clausewise", "rank", "a.txt", "b.txt", "--json"]).unwrap();
        match cli.command {
            Commands::Rank { files, output, .. } => {
                assert_eq!(files.len(), 2);
                assert!(output.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["clausewise", "analyze", "-", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn disabled_flag_reaches_config() {
        let cli = Cli::try_parse_from([
            "clausewise",
            "llm-status",
            "--ollama-enabled",
            "FALSE",
            "--ollama-url",
            "http://localhost:11434/",
        ])
        .unwrap();
        let Commands::LlmStatus { llm, .. } = cli.command else {
            panic!("expected llm-status");
        };
        let client = llm.client();
        assert!(!client.config().enabled);
        assert_eq!(client.config().base_url, "http://localhost:11434");
    }
}
