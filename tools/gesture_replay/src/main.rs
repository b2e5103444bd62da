mod trace;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cupcake_touch::{GestureConfig, GestureEvent, GestureInterpreter};
use gesture_config_compiler::{parse_gestures_file, validate_config, GesturesFile};

use trace::{parse_trace, ContactAction, TraceLine};

/// Tail appended after the last trace line so pending long-presses resolve.
const FLUSH_TAIL_MS: u64 = 1_000;

#[derive(Debug, Parser)]
#[command(name = "gesture_replay")]
#[command(about = "Replay a recorded contact trace through the gesture interpreter")]
struct Cli {
    trace: PathBuf,
    /// File with one expected event kind per line.
    #[arg(long)]
    expect: Option<PathBuf>,
    /// Gesture settings in the `config/gestures.toml` format.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GestureConfig::default(),
    };
    config
        .validate()
        .context("gesture config rejected by interpreter")?;

    let lines = parse_trace(&cli.trace)?;
    log::info!("replaying {} lines from {}", lines.len(), cli.trace.display());
    let events = replay(config, &lines);

    println!("event,ms,kind,x,y,start_x,start_y,duration_ms");
    for event in &events {
        println!(
            "event,{},{},{},{},{},{},{}",
            event.t_ms,
            event.kind.label(),
            event.x,
            event.y,
            event.start_x,
            event.start_y,
            event.duration_ms
        );
    }

    if let Some(expect_path) = &cli.expect {
        let expected = parse_expected_kinds(expect_path)?;
        let actual: Vec<&'static str> = events.iter().map(|e| e.kind.label()).collect();
        if actual != expected {
            eprintln!("expected kinds: {}", expected.join(","));
            eprintln!("actual kinds:   {}", actual.join(","));
            bail!("event sequence mismatch");
        }
        log::info!("{} events match {}", actual.len(), expect_path.display());
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<GestureConfig> {
    let file = parse_gestures_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    validate_config(&file).with_context(|| format!("invalid {}", path.display()))?;
    Ok(gesture_config_from_file(&file))
}

fn gesture_config_from_file(file: &GesturesFile) -> GestureConfig {
    GestureConfig {
        feedback_enabled: file.feedback.enabled,
        swipe_enabled: file.swipe.enabled,
        swipe_threshold: file.swipe.threshold,
        tap_max_duration_ms: file.tap.max_duration_ms,
        tap_max_movement: file.tap.max_movement,
        long_press_delay_ms: file.long_press.delay_ms,
        long_press_slop: file.long_press.slop,
        long_press_terminal: file.long_press.terminal,
        prevent_default_touch_move: file.touch_move.prevent_default,
    }
}

fn replay(config: GestureConfig, lines: &[TraceLine]) -> Vec<GestureEvent> {
    let mut interpreter = GestureInterpreter::listening(config);
    let mut events = Vec::new();

    for line in lines {
        let output = match line.action {
            ContactAction::Start => interpreter.on_contact_start(line.point()),
            ContactAction::Move => interpreter.on_contact_move(line.point()),
            ContactAction::End => interpreter.on_contact_end(line.point()),
            ContactAction::Cancel => interpreter.on_contact_cancel(line.ms),
            ContactAction::Poll => interpreter.poll(line.ms),
        };
        events.extend(output.events);
    }

    if let Some(last) = lines.last() {
        let output = interpreter.poll(last.ms.saturating_add(FLUSH_TAIL_MS));
        events.extend(output.events);
    }
    events
}

fn parse_expected_kinds(path: &Path) -> Result<Vec<&'static str>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut kinds = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line =
            line_result.with_context(|| format!("failed to read {}:{}", path.display(), line_no))?;
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }

        let Some(kind) = normalize_kind(token) else {
            bail!(
                "{}:{} invalid expected event kind: {}",
                path.display(),
                line_no,
                token
            );
        };
        kinds.push(kind);
    }

    Ok(kinds)
}

fn normalize_kind(kind: &str) -> Option<&'static str> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "start" => Some("start"),
        "move" => Some("move"),
        "end" => Some("end"),
        "tap" => Some("tap"),
        "long_press" => Some("long_press"),
        "swipe_left" => Some("swipe_left"),
        "swipe_right" => Some("swipe_right"),
        "swipe_up" => Some("swipe_up"),
        "swipe_down" => Some("swipe_down"),
        "cancel" => Some("cancel"),
        _ => None,
    }
}
