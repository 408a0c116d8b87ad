use anyhow::{Result, ensure};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use seedworld::{Command, CommandOutcome, Direction, Session, TileKind, WorldConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42, allow_hyphen_values = true)]
    seed: i64,
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: u32,
    /// Seed for the command stream; defaults to the world seed
    #[arg(short, long)]
    command_seed: Option<u64>,
}

const COMMANDS: [Command; 6] = [
    Command::Move(Direction::North),
    Command::Move(Direction::South),
    Command::Move(Direction::East),
    Command::Move(Direction::West),
    Command::EnterFeature,
    Command::ToggleLock,
];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(session: &Session) -> Result<()> {
    let grid = session.grid();
    ensure!(grid.count(TileKind::Avatar) == 1, "Invariant failed: avatar count != 1");
    ensure!(grid.get(session.avatar()) == Some(TileKind::Avatar), "Invariant failed: avatar tile");
    ensure!(grid.count(TileKind::Empty) == 0, "Invariant failed: empty tile after generation");
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
    let args = Args::parse();

    info!(seed = args.seed, steps = args.steps, "starting fuzz harness");
    let mut session = Session::new(args.seed, &WorldConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.command_seed.unwrap_or(args.seed as u64));
    check_invariants(&session)?;

    let mut moved = 0u32;
    let mut closet_visits = 0u32;
    for step in 0..args.steps {
        let command = choose(&mut rng, &COMMANDS);
        let before = session.snapshot_hash();
        let outcome = session.apply(command)?;
        match outcome {
            CommandOutcome::Moved(_) => moved += 1,
            CommandOutcome::EnteredCloset => closet_visits += 1,
            CommandOutcome::Blocked | CommandOutcome::NoEffect => ensure!(
                session.snapshot_hash() == before,
                "Invariant failed: {outcome:?} changed state at step {step}"
            ),
            _ => {}
        }
        debug!(step, ?command, ?outcome);
        check_invariants(&session)?;
    }

    let saved = session.save();
    if !session.in_closet() && closet_visits == 0 {
        let restored = Session::restore(&saved, &WorldConfig::default())?;
        ensure!(
            restored.snapshot_hash() == session.snapshot_hash(),
            "Invariant failed: restore diverged from live session"
        );
    }

    println!("Fuzz complete: {} steps, {moved} moves, {closet_visits} closet visits", args.steps);
    println!("Snapshot Hash: 0x{:016x}", session.snapshot_hash());
    Ok(())
}
