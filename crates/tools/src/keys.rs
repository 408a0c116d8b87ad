//! Raw key scripts (`n123sswad:q`, `lwwo`) to commands. Keys are case-insensitive and
//! read differently depending on whether a seed is being typed.

use seedworld::{Command, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyPhase {
    Menu,
    Seed,
    Play,
}

/// Unknown keys are dropped, except while typing a seed where every key but `s` is kept
/// as a seed character so a malformed seed is reported instead of silently shortened.
pub fn parse_keys(script: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut phase = KeyPhase::Menu;
    let mut keys = script.chars().filter(|key| !key.is_whitespace()).peekable();

    while let Some(key) = keys.next() {
        let key = key.to_ascii_lowercase();
        let command = match (phase, key) {
            (KeyPhase::Menu, 'n') => {
                phase = KeyPhase::Seed;
                Some(Command::NewGame)
            }
            (KeyPhase::Menu, 'l') => {
                phase = KeyPhase::Play;
                Some(Command::LoadGame)
            }
            (KeyPhase::Menu, _) => None,
            (KeyPhase::Seed, 's') => {
                phase = KeyPhase::Play;
                Some(Command::ConfirmSeed)
            }
            (KeyPhase::Seed, digit) => Some(Command::SeedDigit(digit)),
            (KeyPhase::Play, ':') => match keys.next_if(|next| next.eq_ignore_ascii_case(&'q')) {
                Some(_) => {
                    phase = KeyPhase::Menu;
                    Some(Command::QuitAndSave)
                }
                None => None,
            },
            (KeyPhase::Play, key) => play_key(key),
        };
        commands.extend(command);
    }
    commands
}

fn play_key(key: char) -> Option<Command> {
    let command = match key {
        'w' => Command::Move(Direction::North),
        'a' => Command::Move(Direction::West),
        's' => Command::Move(Direction::South),
        'd' => Command::Move(Direction::East),
        'o' => Command::EnterFeature,
        'c' => Command::ToggleLock,
        _ => return None,
    };
    Some(command)
}
