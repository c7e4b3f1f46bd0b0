use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchpad::{Config, InputEvent, Sketchpad};
use std::fs;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version = VERSION, about = "Freehand drawing core driven by recorded event scripts")]
struct Cli {
    /// Replay a JSON event script through the drawing core
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Export the final canvas to PATH (format from extension: png, eps, ps, svg, pdf)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the final primitive list as JSON on stdout
    #[arg(long, action = ArgAction::SetTrue)]
    dump: bool,

    /// Load canvas, tool and export settings from a TOML file
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if cli.replay.is_none() && cli.output.is_none() && !cli.dump {
        if let Some(path) = &cli.config {
            // Config alone: it loaded, so it is valid
            println!("Config OK: {}", path.display());
            return Ok(());
        }

        // No flags: show usage
        println!("sketchpad: Freehand drawing core driven by recorded event scripts");
        println!();
        println!("Usage:");
        println!("  sketchpad --replay events.json --output drawing.eps");
        println!("  sketchpad --replay events.json --dump");
        println!("  sketchpad --config sketchpad.toml     (validate a config file)");
        println!("  sketchpad --help");
        println!();
        println!("Event script (JSON array, one object per event):");
        println!(r#"  [{{"event": "pen_type_selected", "pen_type": "round"}},"#);
        println!(r#"   {{"event": "drag_start"}},"#);
        println!(r#"   {{"event": "drag_sample", "x": 10, "y": 10}},"#);
        println!(r#"   {{"event": "drag_sample", "x": 20, "y": 20}},"#);
        println!(r#"   {{"event": "drag_end"}},"#);
        println!(r#"   {{"event": "export_snapshot", "path": "drawing.png"}}]"#);
        println!();
        println!("Other events: tool_selected, color_selected, size_selected, clear, undo");
        return Ok(());
    }

    let mut pad = Sketchpad::new(&config);

    if let Some(script_path) = &cli.replay {
        let script = fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read event script {}", script_path.display()))?;
        let events = InputEvent::parse_script(&script)
            .with_context(|| format!("Invalid event script {}", script_path.display()))?;

        log::info!("Replaying {} events from {}", events.len(), script_path.display());
        let exported = pad
            .replay(events)
            .with_context(|| format!("Replay of {} failed", script_path.display()))?;
        for path in exported {
            log::info!("Script exported {}", path.display());
        }
    }

    if let Some(output) = &cli.output {
        let saved = pad
            .export(Some(output))
            .with_context(|| format!("Failed to export canvas to {}", output.display()))?;
        println!("{}", saved.display());
    }

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(pad.primitives())?);
    }

    log::info!("Finished with {} primitives", pad.primitives().len());
    Ok(())
}
