use anyhow::Context;
use chrono::Local;
use clap::ArgMatches;
use colored::Colorize;
use sitemapgen_core::crawl::{CrawlOptions, execute_crawl, generate_crawl_report};
use sitemapgen_core::sitemap::write_sitemap;
use sitemapgen_scanner::{CancellationFlag, DomainRule};
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{Level, warn};
use url::Url;

use crate::commands::command_argument_builder;

/// Everything a sitemap run needs, pulled out of the parsed arguments.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub options: CrawlOptions,
    pub output: PathBuf,
    pub verbose: bool,
}

/// Returns `None` unless both the seed URL and the output path were given.
pub fn parse_generate_args(matches: &ArgMatches) -> Option<GenerateArgs> {
    let seed = matches.get_one::<Url>("URL")?;
    let output = matches.get_one::<String>("OUTPUT")?;

    let mut options = CrawlOptions::new(seed.as_str());
    options.silent = matches.get_flag("silent");
    options.exclude_base = matches.get_flag("exclude-base");
    options.timeout_secs = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(options.timeout_secs);
    if matches.get_flag("strict-host") {
        options.domain_rule = DomainRule::ExactHost;
    }

    Some(GenerateArgs {
        options,
        output: expand_output_path(output),
        verbose: matches.get_flag("verbose"),
    })
}

/// Expand a leading `~` in the output path.
pub fn expand_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn usage_text() -> String {
    let usage = command_argument_builder().render_usage();
    format!(
        "{}\nTo silence crawler logs, add \"--silent\" or \"-s\" to the command.\n",
        usage
    )
}

pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Turn every Ctrl-C into a stop request instead of killing the process.
pub fn spawn_interrupt_listener(cancel: CancellationFlag) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    if cancel.request_stop() {
                        println!("\n{}\n", CancellationFlag::NOTICE.yellow());
                    }
                }
                Err(err) => {
                    warn!("Unable to listen for interrupt signal: {}", err);
                    break;
                }
            }
        }
    })
}

/// Crawl, print the collected links and write the sitemap.
/// Returns the number of entries written.
pub async fn handle_generate(args: GenerateArgs, cancel: &CancellationFlag) -> anyhow::Result<usize> {
    let GenerateArgs { options, output, .. } = args;

    let lastmod = Local::now().date_naive();

    let records = execute_crawl(options, cancel)
        .await
        .context("Crawl could not start")?;

    println!("{}", "\n<----- showing crawled links ------>\n".green());
    print!("{}", generate_crawl_report(&records));

    write_sitemap(&records, lastmod, &output)
        .with_context(|| format!("Failed to write sitemap to \"{}\"", output.display()))?;

    println!(
        "{}",
        format!("Your sitemap has been written to \"{}\".", output.display()).green()
    );

    Ok(records.len())
}
