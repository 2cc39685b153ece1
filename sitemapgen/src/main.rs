use colored::Colorize;
use sitemapgen::commands::command_argument_builder;
use sitemapgen::handlers::{
    handle_generate, init_tracing, parse_generate_args, spawn_interrupt_listener, usage_text,
};
use sitemapgen_scanner::CancellationFlag;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    let Some(args) = parse_generate_args(&matches) else {
        print!("{}", usage_text());
        return;
    };

    init_tracing(args.verbose);

    let cancel = CancellationFlag::new();
    spawn_interrupt_listener(cancel.clone());

    if let Err(e) = handle_generate(args, &cancel).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
