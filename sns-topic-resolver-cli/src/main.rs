//! Command-line front end for resolving SNS topic ARNs.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use serde::Serialize;
use sns_topic_resolver::{
    list_all_topic_arns, Arn, SnsClientOptions, SnsTopicArnResolver, SnsTopicLister,
    TopicArnError, TopicArnResolver,
};

/// Exit code when the listing succeeded but no topic had the requested name.
const EXIT_TOPIC_NOT_FOUND: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "sns-topic-resolver",
    version,
    about = "Resolve Amazon SNS topic names to topic ARNs"
)]
struct Cli {
    #[command(flatten)]
    aws: AwsArgs,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct AwsArgs {
    /// AWS region to query
    #[arg(long, env = "AWS_REGION", global = true)]
    region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, env = "AWS_PROFILE", global = true)]
    profile: Option<String>,

    /// Override the SNS endpoint, e.g. for a local emulator
    #[arg(long, env = "AWS_ENDPOINT_URL", global = true)]
    endpoint_url: Option<String>,
}

impl From<AwsArgs> for SnsClientOptions {
    fn from(args: AwsArgs) -> Self {
        Self {
            region: args.region,
            profile: args.profile,
            endpoint_url: args.endpoint_url,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a topic name (or full topic ARN) to its ARN
    Resolve {
        /// Bare topic name, matched exactly against the last ARN segment
        topic: String,
    },
    /// List every topic ARN visible to the current credentials
    List,
}

#[derive(Serialize)]
struct ResolvedTopic<'a> {
    topic_name: &'a str,
    topic_arn: &'a Arn,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let not_found = err
                .downcast_ref::<TopicArnError>()
                .is_some_and(TopicArnError::is_not_found);
            if not_found {
                ExitCode::from(EXIT_TOPIC_NOT_FOUND)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let options = SnsClientOptions::from(cli.aws);
    debug!("Using client options: {:?}", options);
    let lister = SnsTopicLister::from_options(&options).await;

    match cli.command {
        Command::Resolve { topic } => {
            let resolver = SnsTopicArnResolver::new(lister);
            let arn = resolver
                .resolve_topic_arn(&topic)
                .await
                .with_context(|| format!("Failed to resolve topic '{topic}'"))?;

            if cli.json {
                let resolved = ResolvedTopic {
                    topic_name: &topic,
                    topic_arn: &arn,
                };
                println!(
                    "{}",
                    serde_json::to_string(&resolved).context("Failed to serialize result")?
                );
            } else {
                println!("{arn}");
            }
        }
        Command::List => {
            let topic_arns = list_all_topic_arns(&lister)
                .await
                .context("Failed to list topics")?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&topic_arns).context("Failed to serialize result")?
                );
            } else {
                for topic_arn in &topic_arns {
                    println!("{topic_arn}");
                }
            }
        }
    }
    Ok(())
}
