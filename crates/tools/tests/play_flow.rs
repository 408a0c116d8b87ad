use proptest::prelude::*;
use seedworld::{CommandJournal, ScriptedCommands, Session, WorldConfig};
use seedworld_tools::driver::{PlayResult, play, replay};
use seedworld_tools::journal_file::{JournalWriter, load_journal_from_file};
use seedworld_tools::keys::parse_keys;
use seedworld_tools::save_file::SaveFile;
use tempfile::tempdir;

fn play_script(keys: &str, save: Option<&SaveFile>) -> PlayResult {
    let persisted = save.map(|file| file.session);
    play(ScriptedCommands::new(parse_keys(keys)), persisted, &WorldConfig::default())
        .expect("script should play")
}

fn final_session(result: PlayResult) -> Session {
    result.session.expect("script starts a session")
}

#[test]
fn test_quit_then_load_through_save_file_matches_single_run() {
    let dir = tempdir().expect("tempdir");
    let save_path = dir.path().join("savefile.json");

    let first = play_script("n123sswwdd:q", None);
    let saved = *first.saves.last().expect("quit writes a save");
    let hash = final_session(first).snapshot_hash();
    SaveFile::new(saved, hash).write_atomic(&save_path).expect("write save");

    let save = SaveFile::load(&save_path).expect("read save");
    assert_eq!(save.session, saved);
    let resumed = final_session(play_script("lddss", Some(&save)));
    let straight = final_session(play_script("n123sswwddddss", None));

    assert_eq!(resumed.avatar(), straight.avatar());
    assert_eq!(resumed.grid(), straight.grid());
    assert_eq!(resumed.snapshot_hash(), straight.snapshot_hash());
}

#[test]
fn test_journal_file_replay_matches_live_play() {
    let dir = tempdir().expect("tempdir");
    let journal_path = dir.path().join("run.jsonl");
    let keys = "n-8sddwwo:qlsa";

    let mut writer = JournalWriter::create(&journal_path, "test", None).expect("create journal");
    for command in parse_keys(keys) {
        writer.append(command).expect("append");
    }
    drop(writer);

    let live = play_script(keys, None);
    let loaded = load_journal_from_file(&journal_path).expect("load journal");
    let replayed =
        play(loaded.journal.to_source(), None, &WorldConfig::default()).expect("replay journal");

    assert_eq!(live.saves, replayed.saves);
    assert_eq!(final_session(live).snapshot_hash(), final_session(replayed).snapshot_hash());
}

#[test]
fn test_journal_starting_with_load_replays_after_save_is_overwritten() {
    let dir = tempdir().expect("tempdir");
    let save_path = dir.path().join("savefile.json");
    let journal_path = dir.path().join("resume.jsonl");

    let first = play_script("n123sdd:q", None);
    let saved = *first.saves.last().expect("quit writes a save");
    SaveFile::new(saved, final_session(first).snapshot_hash())
        .write_atomic(&save_path)
        .expect("write first save");

    // Record against the save on disk, play, then overwrite that save.
    let keys = "lwwww:q";
    let on_disk = SaveFile::load(&save_path).expect("read first save");
    let mut writer =
        JournalWriter::create(&journal_path, "test", Some(on_disk.session)).expect("create");
    for command in parse_keys(keys) {
        writer.append(command).expect("append");
    }
    drop(writer);
    let live = play_script(keys, Some(&on_disk));
    let resaved = *live.saves.last().expect("second quit writes a save");
    let live_saves = live.saves.clone();
    let live_session = final_session(live);
    assert_ne!(resaved.avatar, saved.avatar);
    SaveFile::new(resaved, live_session.snapshot_hash())
        .write_atomic(&save_path)
        .expect("overwrite save");

    let loaded = load_journal_from_file(&journal_path).expect("load journal");
    assert_eq!(loaded.journal.persisted, Some(saved));
    let replayed = replay(&loaded.journal, &WorldConfig::default()).expect("replay journal");

    assert_eq!(replayed.saves, live_saves);
    let replayed_session = final_session(replayed);
    assert_eq!(replayed_session.avatar(), live_session.avatar());
    assert_eq!(replayed_session.snapshot_hash(), live_session.snapshot_hash());
}

#[test]
fn test_malformed_seed_script_fails() {
    let result = play(ScriptedCommands::new(parse_keys("n12x4s")), None, &WorldConfig::default());
    assert!(result.is_err());
}

fn move_keys() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['w', 'a', 's', 'd']), 0..20)
        .prop_map(|keys| keys.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn quit_and_load_in_one_script_matches_straight_play(
        seed in 0u32..100_000,
        before in move_keys(),
        after in move_keys(),
    ) {
        let interrupted = play_script(&format!("n{seed}s{before}:ql{after}"), None);
        let straight = play_script(&format!("n{seed}s{before}{after}"), None);

        prop_assert_eq!(interrupted.saves.len(), 1);
        let interrupted = final_session(interrupted);
        let straight = final_session(straight);
        prop_assert_eq!(interrupted.avatar(), straight.avatar());
        prop_assert_eq!(interrupted.snapshot_hash(), straight.snapshot_hash());
    }

    #[test]
    fn recorded_load_replays_like_live_play(
        seed in 0u32..100_000,
        before in move_keys(),
        after in move_keys(),
    ) {
        let first = play_script(&format!("n{seed}s{before}:q"), None);
        let on_disk = first.saved;
        prop_assert!(on_disk.is_some());

        let keys = format!("l{after}:q");
        let live = play(ScriptedCommands::new(parse_keys(&keys)), on_disk, &WorldConfig::default())
            .expect("live play");
        let journal = CommandJournal::from_commands(parse_keys(&keys)).with_persisted(on_disk);
        let replayed = replay(&journal, &WorldConfig::default()).expect("replay");

        prop_assert_eq!(&replayed.saves, &live.saves);
        prop_assert_eq!(replayed.saved, live.saved);
    }
}
