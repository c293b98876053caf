mod backend_bridge;
mod controller;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::bounded;

use crate::backend_bridge::runtime::start_backend_bridge;
use crate::ui::ContactsApp;

#[derive(Parser, Debug)]
#[command(about = "Contact manager desktop GUI")]
struct Args {
    /// Base URL of the contact store.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded(64);
    let (ui_tx, ui_rx) = bounded(256);
    start_backend_bridge(args.server_url, cmd_rx, ui_tx);

    eframe::run_native(
        "Contact Manager",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ContactsApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop gui: {err}"))
}
