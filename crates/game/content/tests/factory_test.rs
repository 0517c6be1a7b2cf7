//! Loads whole data directories through `ContentFactory`.

use std::fs;
use std::path::{Path, PathBuf};

use horde_content::ContentFactory;
use tempfile::TempDir;

const CONFIG: &str = "max_population = 50\nboosted_by_pressure = false\n";

const BESTIARY: &str = r#"{
    "bat": (max_health: 4.0, move_speed: 2.5),
    "reaper": (max_health: 500.0, experience: 0),
}"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn fixture(campaign: &str) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "config.toml", CONFIG);
    write(dir.path(), "bestiary.ron", BESTIARY);
    write(dir.path(), "trial.ron", campaign);
    dir
}

fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn loads_a_directory_without_passives() {
    let dir = fixture(
        r#"(
            waves: [(name: "bats", spawn_pool: ["bat"], duration: 30.0, exit_conditions: "WAVE_DURATION")],
            boss: Some((kind: "reaper", time_limit: 60.0)),
        )"#,
    );

    let content = ContentFactory::new(dir.path())
        .load_all("trial")
        .expect("content should load");

    assert_eq!(content.config.max_population, 50);
    assert!(!content.config.boosted_by_pressure);
    assert_eq!(content.campaign.waves.len(), 1);
    assert_eq!(content.bestiary.len(), 2);
    assert!(content.passives.is_empty());
}

#[test]
fn unknown_kinds_are_reported_once_each() {
    let dir = fixture(
        r#"(
            waves: [(name: "mixed", spawn_pool: ["bat", "ghoul", "ghoul"])],
            events: [(name: "pack", kind: "wolf", count: 3)],
        )"#,
    );

    let err = ContentFactory::new(dir.path())
        .load_all("trial")
        .expect_err("unknown kinds must fail");
    let message = err.to_string();
    assert!(message.contains("ghoul, wolf"), "{message}");
}

#[test]
fn starting_passives_must_exist() {
    let dir = fixture(
        r#"(
            waves: [(name: "bats", spawn_pool: ["bat"])],
            player: (starting_passives: ["clover"]),
        )"#,
    );
    write(
        dir.path(),
        "passives.ron",
        r#"{ "armor": (rule: add, entries: [(armor, 1.0)]) }"#,
    );

    let err = ContentFactory::new(dir.path())
        .load_all("trial")
        .expect_err("unknown passive must fail");
    assert!(err.to_string().contains("clover"));
}

#[test]
fn waves_that_end_on_their_first_step_fail_to_load() {
    let dir = fixture(
        r#"(
            waves: [
                (name: "bats", spawn_pool: ["bat"]),
                (name: "endless", spawn_pool: ["bat"], duration: 0.0, exit_conditions: "WAVE_DURATION"),
            ],
        )"#,
    );

    let err = ContentFactory::new(dir.path())
        .load_all("trial")
        .expect_err("a wave that ends immediately must be rejected");
    assert!(format!("{err:#}").contains("wave 1"), "{err:#}");
}

#[test]
fn missing_campaign_file_is_an_error() {
    let dir = fixture("(waves: [])");
    assert!(ContentFactory::new(dir.path()).load_all("absent").is_err());
}

#[test]
fn shipped_data_is_consistent() {
    let content = ContentFactory::new(shipped_data_dir())
        .load_all("campaign")
        .expect("shipped content should load");

    assert_eq!(content.campaign.waves.validate(), Ok(()));
    assert!(
        content
            .campaign
            .waves
            .waves()
            .iter()
            .all(|wave| wave.can_outlast_start())
    );
    assert_eq!(content.campaign.player.starting_passives, ["armor"]);
    assert!(content.bestiary.contains("reaper"));
    assert!(content.campaign.boss.is_some());
}
