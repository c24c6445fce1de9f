use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clap::Parser;
use serde::Serialize;

use recall_core::{HandlerRegistry, HistoryStore, Record, RecordHandler};

/// Walks a color list through the undo/redo engine with asynchronous
/// handlers.
#[derive(Parser, Debug)]
#[command(name = "recall-demo", version, about)]
struct Cli {
    /// Number of colors to push before undoing.
    #[arg(long, default_value_t = 4)]
    colors: usize,

    /// Artificial latency of each undo/redo handler, in milliseconds.
    #[arg(long = "latency-ms", default_value_t = 50)]
    latency_ms: u64,
}

const PALETTE_CODES: &[&str] = &[
    "#ff5733", "#33ff57", "#3357ff", "#f1c40f", "#9b59b6", "#1abc9c",
];

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum PaletteRecord {
    AddColor { code: String },
}

impl Record for PaletteRecord {
    fn kind(&self) -> &str {
        match self {
            PaletteRecord::AddColor { .. } => "add_color",
        }
    }
}

type Palette = Arc<Mutex<Vec<String>>>;

fn lock_palette(palette: &Palette) -> Result<MutexGuard<'_, Vec<String>>> {
    palette.lock().map_err(|_| anyhow!("palette mutex poisoned"))
}

/// Reverses/reapplies a pushed color after a simulated backend delay.
struct AddColorHandler {
    palette: Palette,
    latency: Duration,
}

#[async_trait]
impl RecordHandler<PaletteRecord> for AddColorHandler {
    async fn undo(&self, _record: &PaletteRecord) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        lock_palette(&self.palette)?.pop();
        Ok(())
    }

    async fn redo(&self, record: &PaletteRecord) -> Result<()> {
        let PaletteRecord::AddColor { code } = record;
        tokio::time::sleep(self.latency).await;
        lock_palette(&self.palette)?.push(code.clone());
        Ok(())
    }
}

fn print_state(
    label: &str,
    history: &HistoryStore<PaletteRecord>,
    palette: &Palette,
) -> Result<()> {
    println!("== {label}");
    println!("palette:  {:?}", lock_palette(palette)?.as_slice());
    println!("past:     {}", serde_json::to_string(history.past())?);
    println!("future:   {}", serde_json::to_string(history.future())?);
    println!(
        "can_undo: {}  can_redo: {}",
        history.can_undo(),
        history.can_redo()
    );
    println!();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting recall-demo");

    let palette: Palette = Arc::new(Mutex::new(Vec::new()));
    let registry = HandlerRegistry::new().register(
        "add_color",
        AddColorHandler {
            palette: Arc::clone(&palette),
            latency: Duration::from_millis(cli.latency_ms),
        },
    );
    let mut history = HistoryStore::new(registry);

    for i in 0..cli.colors {
        let code = PALETTE_CODES[i % PALETTE_CODES.len()].to_string();
        lock_palette(&palette)?.push(code.clone());
        history.add(PaletteRecord::AddColor { code });
    }
    print_state("after pushes", &history, &palette)?;

    history.undo().await?;
    history.undo().await?;
    print_state("after two undos", &history, &palette)?;

    history.redo().await?;
    print_state("after one redo", &history, &palette)?;

    // A fresh action makes the undone branch unreachable.
    let code = "#112233".to_string();
    lock_palette(&palette)?.push(code.clone());
    history.add(PaletteRecord::AddColor { code });
    print_state("after a new push", &history, &palette)?;

    history.clear_history();
    print_state("after clearing history", &history, &palette)?;

    Ok(())
}
