// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use rolldice::die::{
    export_faces, pip_layout, AppSettings, DiePlugin, FaceStyle, FaceValue, Language, RollEngine,
    RollTrigger, DEFAULT_SETTINGS_FILE,
};

/// Roll a die - one 3D six-sided die with animated rolls
#[derive(Parser)]
#[command(name = "rolldice")]
#[command(
    author,
    version,
    about = "Roll a die - one 3D six-sided die with animated rolls"
)]
struct Cli {
    /// Run in CLI mode (no GUI)
    #[arg(long)]
    cli: bool,

    /// Number of rolls in CLI mode
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Roll once as soon as the window opens
    #[arg(long)]
    roll: bool,

    /// Open a deep link, e.g. diceapp://roll
    #[arg(long = "open-url", value_name = "URL")]
    open_url: Option<String>,

    /// Path to the settings JSON file
    #[arg(short = 's', long = "settings", default_value = DEFAULT_SETTINGS_FILE)]
    settings_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the six face textures as PNG files
    ExportFaces {
        /// Output directory
        #[arg(short, long, default_value = "faces")]
        out: PathBuf,

        /// Edge length in pixels (defaults to the settings value)
        #[arg(long)]
        size: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Settings errors print here too, so attach before loading.
    if cli.cli || cli.command.is_some() {
        use_terminal_console();
    }

    let settings = load_settings(&cli.settings_file);

    match &cli.command {
        Some(Commands::ExportFaces { out, size }) => run_export_faces(&settings, out, *size),
        None if cli.cli => run_cli_rolls(&settings, cli.count),
        None => run_3d_mode(&cli, settings),
    }
}

/// Read the settings file, reporting a bad file on stderr and using defaults.
fn load_settings(path: &Path) -> AppSettings {
    AppSettings::load_from_file(path).unwrap_or_else(|e| {
        eprintln!("{} {}; using default settings", "Warning:".yellow().bold(), e);
        AppSettings::default()
    })
}

/// Route stdout/stderr to the launching terminal, or a new console when
/// started without one.
#[cfg(windows)]
fn use_terminal_console() {
    #[link(name = "kernel32")]
    extern "system" {
        fn AttachConsole(process_id: u32) -> i32;
        fn AllocConsole() -> i32;
    }

    // u32::MAX is ATTACH_PARENT_PROCESS.
    let attached = unsafe { AttachConsole(u32::MAX) != 0 || AllocConsole() != 0 };
    if !attached {
        eprintln!("No console available for CLI output");
    }
}

#[cfg(not(windows))]
fn use_terminal_console() {}

// ============================================================================
// 3D Mode
// ============================================================================

fn run_3d_mode(cli: &Cli, settings: AppSettings) {
    let mut roll_on_launch = cli.roll;
    if let Some(url) = &cli.open_url {
        match RollTrigger::from_deep_link(url) {
            Some(_) => roll_on_launch = true,
            None => eprintln!("Ignoring unknown link '{}'", url),
        }
    }

    let title = Language::resolve(settings.language.as_deref())
        .for_window(settings.font_path.is_some())
        .text("app.title");

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        resolution: (360u32, 420u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb(0.11, 0.11, 0.13)))
        .add_plugins(DiePlugin {
            settings,
            roll_on_launch,
        })
        .run();
}

// ============================================================================
// CLI Mode
// ============================================================================

fn run_cli_rolls(settings: &AppSettings, count: u32) {
    let language = Language::resolve(settings.language.as_deref());
    let mut engine = RollEngine::from_settings(settings);

    let faces = match roll_faces(&mut engine, count) {
        Ok(faces) => faces,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if let [face] = faces.as_slice() {
        print_single_roll(language, *face);
    } else {
        print_many_rolls(language, &faces);
    }
}

/// Roll `count` times, running the clock straight to each settle since there
/// is no window to animate.
fn roll_faces(engine: &mut RollEngine, count: u32) -> Result<Vec<FaceValue>, String> {
    let mut faces = Vec::new();
    for _ in 0..count {
        let started = engine
            .roll()
            .ok_or_else(|| "a previous roll is still in flight".to_string())?;
        let settled = engine
            .tick(engine.settle_delay())
            .ok_or_else(|| format!("roll {:?} did not settle", started.roll))?;
        faces.push(settled.face);
    }
    Ok(faces)
}

fn print_single_roll(language: Language, face: FaceValue) {
    println!("\n{}", "═══════════════".cyan());
    for row in ascii_face(face) {
        println!("   {}", row.bold().white());
    }
    println!("{}", "═══════════════".cyan());
    println!(
        "{} {}",
        language.text("cli.result").bold().white(),
        colored_face(face)
    );
}

fn print_many_rolls(language: Language, faces: &[FaceValue]) {
    let list: Vec<String> = faces.iter().map(|f| colored_face(*f).to_string()).collect();
    println!(
        "{} {}",
        language.text("cli.rolling").bold().white(),
        list.join(" ")
    );

    let counts = tally(faces);
    println!("{}", language.text("cli.tally").bold().white());
    for face in FaceValue::ALL {
        let n = counts[face.index()];
        println!("  {}: {:>5} {}", face, n, "█".repeat(bar_width(n, faces.len())).cyan());
    }
}

fn colored_face(face: FaceValue) -> colored::ColoredString {
    let text = face.to_string();
    match face.value() {
        6 => text.bright_green().bold(),
        1 => text.bright_red().bold(),
        _ => text.white().bold(),
    }
}

/// Three text rows drawing the pips of a face on a 3x3 grid
fn ascii_face(face: FaceValue) -> [String; 3] {
    let mut grid = [['·'; 3]; 3];
    for p in pip_layout(face) {
        let col = ((p.x - 0.3) / 0.2).round().clamp(0.0, 2.0) as usize;
        // Layout y points up, rows are printed top first.
        let row = ((0.7 - p.y) / 0.2).round().clamp(0.0, 2.0) as usize;
        grid[row][col] = '●';
    }
    grid.map(|row| {
        row.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn tally(faces: &[FaceValue]) -> [usize; 6] {
    let mut counts = [0usize; 6];
    for face in faces {
        counts[face.index()] += 1;
    }
    counts
}

fn bar_width(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (count * 30 + total / 2) / total
}

// ============================================================================
// Face export
// ============================================================================

fn run_export_faces(settings: &AppSettings, out: &Path, size: Option<u32>) {
    let mut style = FaceStyle::from_settings(settings);
    if let Some(size) = size {
        style.size = size.clamp(16, 2048);
    }

    match export_faces(out, &style) {
        Ok(paths) => {
            for path in paths {
                println!("{} {}", "Wrote".green(), path.display());
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_face_patterns() {
        assert_eq!(ascii_face(FaceValue::ONE), ["· · ·", "· ● ·", "· · ·"]);
        assert_eq!(ascii_face(FaceValue::TWO), ["· · ●", "· · ·", "● · ·"]);
        assert_eq!(ascii_face(FaceValue::FIVE), ["● · ●", "· ● ·", "● · ●"]);
        assert_eq!(ascii_face(FaceValue::SIX), ["● · ●", "● · ●", "● · ●"]);
    }

    #[test]
    fn test_tally_counts_each_face() {
        let faces = [FaceValue::ONE, FaceValue::SIX, FaceValue::SIX, FaceValue::THREE];
        assert_eq!(tally(&faces), [1, 0, 1, 0, 0, 2]);
        assert_eq!(tally(&[]), [0; 6]);
    }

    #[test]
    fn test_bar_width_scales_to_thirty() {
        assert_eq!(bar_width(10, 10), 30);
        assert_eq!(bar_width(5, 10), 15);
        assert_eq!(bar_width(0, 10), 0);
        assert_eq!(bar_width(0, 0), 0);
    }

    #[test]
    fn test_cli_parses_export_faces() {
        let cli = Cli::try_parse_from(["rolldice", "export-faces", "--out", "tmp", "--size", "64"])
            .unwrap();
        match cli.command {
            Some(Commands::ExportFaces { out, size }) => {
                assert_eq!(out, PathBuf::from("tmp"));
                assert_eq!(size, Some(64));
            }
            None => panic!("expected export-faces"),
        }
    }

    #[test]
    fn test_roll_faces_settles_every_roll() {
        let mut engine = RollEngine::with_seed(std::time::Duration::from_secs(1), 42);
        let faces = roll_faces(&mut engine, 25).unwrap();

        assert_eq!(faces.len(), 25);
        assert!(!engine.is_rolling());
        assert_eq!(engine.current_face(), faces[24]);
        let recent: Vec<FaceValue> = engine.history().map(|r| r.face).collect();
        assert_eq!(recent[..], faces[5..]);
    }

    #[test]
    fn test_roll_faces_uses_configured_delay() {
        let settings = AppSettings {
            settle_delay_seconds: 3.5,
            ..AppSettings::default()
        };
        let mut engine = RollEngine::from_settings(&settings);
        let faces = roll_faces(&mut engine, 4).unwrap();
        assert_eq!(faces.len(), 4);
        assert_eq!(engine.elapsed(), std::time::Duration::from_secs(14));
    }

    #[test]
    fn test_cli_rejects_zero_count() {
        assert!(Cli::try_parse_from(["rolldice", "--cli", "--count", "0"]).is_err());
        let cli = Cli::try_parse_from(["rolldice", "--cli", "-n", "3"]).unwrap();
        assert_eq!(cli.count, 3);
    }

    #[test]
    fn test_bad_settings_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "rolldice-main-bad-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(AppSettings::load_from_file(&path).is_err());
        assert_eq!(load_settings(&path), AppSettings::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["rolldice"]).unwrap();
        assert!(!cli.cli);
        assert!(!cli.roll);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.settings_file, PathBuf::from(DEFAULT_SETTINGS_FILE));
    }
}
