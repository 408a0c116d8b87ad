use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedworld::{MapGenerator, SavedSession, ScriptedCommands, Session, WorldConfig};
use seedworld_tools::config_file::load_world_config;
use seedworld_tools::driver::{self, PlayResult, play};
use seedworld_tools::journal_file::{JournalWriter, load_journal_from_file};
use seedworld_tools::keys::parse_keys;
use seedworld_tools::save_file::SaveFile;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World generation parameters (TOML); defaults to the reference 80x30 world
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Play a key script such as `n123sswwdd:q`
    Play {
        #[arg(short, long)]
        keys: String,
        /// Save file read by `l` and written by `:q`
        #[arg(short, long)]
        save: Option<PathBuf>,
        /// Record every command to this JSONL journal
        #[arg(short, long)]
        journal: Option<PathBuf>,
    },
    /// Replay a recorded journal from the start menu; loads read the save stored in it
    Replay {
        #[arg(short, long)]
        journal: PathBuf,
    },
    /// Print the generated world for a seed
    Render {
        #[arg(short, long, allow_hyphen_values = true)]
        seed: i64,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_world_config(path)
            .with_context(|| format!("Failed to load world config: {}", path.display()))?,
        None => WorldConfig::default(),
    };

    match args.command {
        Mode::Play { keys, save, journal } => play_keys(&keys, save, journal, &config),
        Mode::Replay { journal } => replay(&journal, &config),
        Mode::Render { seed } => render(seed, &config),
    }
}

fn resolve_save_path(save: Option<PathBuf>) -> Result<PathBuf> {
    save.or_else(SaveFile::get_default_path)
        .context("No --save given and no default data directory is available")
}

fn read_save(path: &Path) -> Result<Option<SavedSession>> {
    let save = SaveFile::load_if_present(path)
        .with_context(|| format!("Failed to read save file: {}", path.display()))?;
    Ok(save.map(|file| file.session))
}

fn play_keys(
    keys: &str,
    save: Option<PathBuf>,
    journal: Option<PathBuf>,
    config: &WorldConfig,
) -> Result<()> {
    let save_path = resolve_save_path(save)?;
    let persisted = read_save(&save_path)?;
    let commands = parse_keys(keys);

    if let Some(journal_path) = journal {
        let mut writer =
            JournalWriter::create(&journal_path, env!("CARGO_PKG_VERSION"), persisted)
                .with_context(|| format!("Failed to create journal: {}", journal_path.display()))?;
        for &command in &commands {
            writer.append(command).context("Failed to append to journal")?;
        }
        info!(path = %journal_path.display(), records = writer.next_seq(), "journal written");
    }

    let result = play(ScriptedCommands::new(commands), persisted, config)?;
    if let Some(saved) = result.saves.last() {
        let hash = Session::restore(saved, config)?.snapshot_hash();
        SaveFile::new(*saved, hash)
            .write_atomic(&save_path)
            .with_context(|| format!("Failed to write save file: {}", save_path.display()))?;
        info!(path = %save_path.display(), "save file written");
    }

    print_result(&result);
    Ok(())
}

fn replay(journal_path: &Path, config: &WorldConfig) -> Result<()> {
    let loaded = load_journal_from_file(journal_path)
        .with_context(|| format!("Failed to load journal: {}", journal_path.display()))?;

    let result = driver::replay(&loaded.journal, config)?;
    println!("Replay complete.");
    println!("Commands: {}", loaded.next_seq);
    print_result(&result);
    Ok(())
}

fn render(seed: i64, config: &WorldConfig) -> Result<()> {
    let generator = MapGenerator::new(config.clone())?;
    let world = generator.generate(seed);
    print!("{}", world.grid.render_text());
    println!("Rooms: {}", world.rooms.len());
    println!("Links: {}", world.chain.link_count());
    println!("Fingerprint: 0x{:016x}", world.fingerprint());
    Ok(())
}

fn print_result(result: &PlayResult) {
    let Some(session) = &result.session else {
        println!("No session was started.");
        return;
    };
    print!("{}", session.grid().render_text());
    println!("Seed: {}", session.seed());
    let area = if session.in_closet() { " (closet)" } else { "" };
    let lock = if session.door_locked() { "locked" } else { "unlocked" };
    println!("Avatar: {:?}{area}", session.avatar());
    println!("Door: {:?} ({lock})", session.door());
    println!("Saves: {}", result.saves.len());
    println!("Snapshot Hash: 0x{:016x}", session.snapshot_hash());
}
