mod app;
mod cart;
mod dashboard;
mod input;
mod menu;
mod model;
mod random;
mod utils;

use std::io;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use crate::{app::View, dashboard::{dashboard_task, render}, input::spawn_stdin_reader};


#[derive(Parser)]
#[command(name = "whataburger-menu")]
#[command(about = "Browse the menu, fill a cart and place an order from the terminal")]
#[command(version)]
struct Cli {
    /// Replay this many random +/- clicks before starting
    #[arg(long, value_name = "N")]
    demo: Option<usize>,

    /// Seed for the demo clicks
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Render a single frame and exit
    #[arg(long)]
    once: bool,

    /// No escape sequences (no screen clearing, no hyperlinks)
    #[arg(long)]
    plain: bool,
}


#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never land inside the rendered frame
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("whataburger_menu=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let ansi = !cli.plain;
    let menu = menu::menu_items();
    let mut view = View::new(menu);

    if let Some(n) = cli.demo {
        info!(clicks = n, seed = cli.seed, "replaying demo clicks");
        for click in random::generator_clicks(menu, n, cli.seed) {
            view.apply(click);
        }
    }

    if cli.once {
        print!("{}", render(&view, ansi));
        return Ok(());
    }

    let mut stdout = io::stdout();

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(input_tx)?;

    let view = dashboard_task(view, input_rx, &mut stdout, ansi).await?;
    info!(items = view.cart().total_items(), "bye");
    Ok(())
}
