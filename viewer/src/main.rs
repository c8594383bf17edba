mod render;

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use c64mc_core::decode::{detect_format, read_image};
use c64mc_core::format::{HEIGHT, WIDTH};
use c64mc_core::palette::colour_name;
use c64mc_core::{preview, OutputFormat};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use crossterm::terminal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "c64mc-view", about = "Show a converted multi-colour bitmap in the terminal")]
struct Cli {
    /// S, H or PRG file written by c64mc-convert
    input: PathBuf,

    /// Input format (default: detect from contents)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let data = std::fs::read(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let format = match cli.format {
        Some(format) => format,
        None => detect_format(&data)
            .with_context(|| format!("unrecognised file format: {}", cli.input.display()))?,
    };
    let image = read_image(&data, format)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(
        "{}: format {format}, background {} ({})",
        cli.input.display(),
        colour_name(image.background),
        image.background
    );

    let rgb = preview::to_rgb(&image);
    let (cols, rows) = (WIDTH as u16, (HEIGHT / 2) as u16);

    let (term_cols, term_rows) = terminal::size()?;
    if term_cols < cols || term_rows < rows {
        warn!(
            "terminal is {term_cols}x{term_rows} but the picture needs {cols}x{rows}. Resize your terminal for best results."
        );
    }

    // Set up panic hook for terminal cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        cleanup_terminal();
        original_hook(info);
    }));

    // Enter alternate screen, raw mode, hide cursor
    terminal::enable_raw_mode()?;
    let stdout = std::io::stdout();
    let mut stdout = BufWriter::with_capacity(256 * 1024, stdout.lock());
    stdout.write_all(b"\x1b[?1049h")?; // enter alternate screen
    stdout.write_all(b"\x1b[?25l")?; // hide cursor
    stdout.write_all(b"\x1b[2J")?;

    let mut render_buf = Vec::with_capacity(256 * 1024);
    render::render_picture(&rgb, WIDTH, HEIGHT, &mut render_buf);
    stdout.write_all(&render_buf)?;
    stdout.flush()?;

    let result = wait_for_quit();

    // Cleanup
    stdout.write_all(b"\x1b[0m")?; // reset colors
    stdout.write_all(b"\x1b[?25h")?; // show cursor
    stdout.write_all(b"\x1b[?1049l")?; // leave alternate screen
    stdout.flush()?;
    terminal::disable_raw_mode()?;

    result
}

fn wait_for_quit() -> anyhow::Result<()> {
    loop {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}

fn cleanup_terminal() {
    let _ = std::io::stdout().write_all(b"\x1b[0m\x1b[?25h\x1b[?1049l");
    let _ = std::io::stdout().flush();
    let _ = terminal::disable_raw_mode();
}
