use clap::{arg, value_parser};
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitemapgen")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitemapgen")
        .about("Crawls a site from a seed URL and writes its sitemap.xml")
        .styles(CLAP_STYLING)
        .arg(
            arg!([URL])
                .required(false)
                .help("The seed URL. Only pages on its domain are crawled")
                .value_parser(value_parser!(Url)),
        )
        .arg(
            arg!([OUTPUT])
                .required(false)
                .help("Where to write the sitemap"),
        )
        .arg(arg!(-s --"silent" "Suppress per-link crawl logs").required(false))
        .arg(
            arg!(--"exclude-base")
                .required(false)
                .help("Leave the seed page out of the sitemap (its links are still followed)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"strict-host")
                .required(false)
                .help(
                    "Compare exact hostnames instead of the first a.b.c run found in each \
                URL",
                )
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("10"),
        )
        .arg(arg!(-v --"verbose" "Show debug logging on stderr").required(false))
}
