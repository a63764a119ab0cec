use anyhow::Context;
use clap::Parser;
use cupcake::config::{Config, ShareTarget};
use cupcake::labels::EnglishLabels;
use cupcake::logging::init_tracing;
use cupcake::order::{OrderState, PriceList};
use cupcake::session::OrderSession;
use cupcake::share::{ClipboardSink, FileSink, ShareSink};
use cupcake::ui::app::App;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cupcake", version, about = "Order cupcakes from the terminal")]
struct Args {
    /// Config file (default: ~/.config/cupcake/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to send the finished order (overrides config)
    #[arg(long, value_enum, value_name = "TARGET")]
    share: Option<ShareTarget>,

    /// Log file (overrides config)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    if args.check_config {
        let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{}", rendered);
        return Ok(());
    }

    let log_path = config.log_path();
    init_tracing(&config.logging.filter, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting cupcake");

    let order = OrderState::new(PriceList::from(&config.pricing));
    let session = OrderSession::new(order);
    let app = App::new(
        session,
        Box::new(EnglishLabels),
        build_sink(&config),
        config.menu.quantity_options.clone(),
    );

    cupcake::ui::runtime::run(app).context("Terminal UI failed")?;
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(target) = args.share {
        config.share.target = target;
    }
    if let Some(path) = &args.log_file {
        config.logging.file = Some(path.clone());
    }
    Ok(config)
}

fn build_sink(config: &Config) -> Box<dyn ShareSink> {
    match config.share.target {
        ShareTarget::Clipboard => match ClipboardSink::new() {
            Ok(sink) => Box::new(sink),
            Err(err) => {
                let outbox = config.outbox_path();
                tracing::warn!(
                    error = %err,
                    outbox = %outbox.display(),
                    "Clipboard unavailable, sharing to outbox file"
                );
                Box::new(FileSink::new(outbox))
            }
        },
        ShareTarget::File => Box::new(FileSink::new(config.outbox_path())),
    }
}
