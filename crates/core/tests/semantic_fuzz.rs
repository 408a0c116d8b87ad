use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use seedworld::{Command, Direction, Session, SessionError, TileKind, WorldConfig};

const PLAY_COMMANDS: [Command; 7] = [
    Command::Move(Direction::North),
    Command::Move(Direction::South),
    Command::Move(Direction::East),
    Command::Move(Direction::West),
    Command::EnterFeature,
    Command::ToggleLock,
    Command::Move(Direction::East),
];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(session: &Session, seed: i64) -> Result<(), String> {
    let grid = session.grid();
    if grid.count(TileKind::Avatar) != 1 {
        return Err(format!("Invariant failed: avatar count != 1 on seed {seed}"));
    }
    if grid.get(session.avatar()) != Some(TileKind::Avatar) {
        return Err(format!("Invariant failed: avatar tile mismatch on seed {seed}"));
    }
    if grid.count(TileKind::Empty) != 0 {
        return Err(format!("Invariant failed: empty tile on seed {seed}"));
    }

    let world = session.world();
    let expected_door =
        if session.door_locked() { TileKind::LockedDoor } else { TileKind::UnlockedDoor };
    let door_tile = world.get(session.door());
    let avatar_on_door = !session.in_closet() && session.avatar() == session.door();
    if !avatar_on_door && door_tile != Some(expected_door) {
        return Err(format!("Invariant failed: door tile {door_tile:?} on seed {seed}"));
    }
    Ok(())
}

fn run_fuzz_session(seed: i64, command_seed: u64, steps: u32) -> Result<(), String> {
    let mut session = Session::new(seed, &WorldConfig::default()).map_err(|e| e.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(command_seed);
    check_invariants(&session, seed)?;

    for _ in 0..steps {
        let command = choose(&mut rng, &PLAY_COMMANDS);
        session.apply(command).map_err(|e| format!("{e} on seed {seed}"))?;
        check_invariants(&session, seed)?;
    }

    session.apply(Command::QuitAndSave).map_err(|e| e.to_string())?;
    if session.apply(Command::ToggleLock) != Err(SessionError::Ended) {
        return Err(format!("Invariant failed: session accepted input after quit on seed {seed}"));
    }
    Ok(())
}

#[test]
fn test_fuzz_session_commands() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(24));
    let seeds = (any::<i64>(), any::<u64>());

    runner
        .run(&seeds, |(seed, command_seed)| {
            run_fuzz_session(seed, command_seed, 400).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("fuzzed sessions should preserve invariants");
}
