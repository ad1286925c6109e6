use std::fs;
use std::path::Path;

use battle_content::{CatalogLoader, ConfigLoader, RosterLoader, list_team_files};
use battle_core::{BattleConfig, UnitId};
use tempfile::TempDir;

const SKILLS: &str = r#"[
    {"name": "Agi", "type": "Fire", "cost": 3, "power": 80, "target": "Single", "hits": "1", "effect": ""},
    {"name": "Zio", "type": "Elec", "cost": 3, "power": 80, "target": "Single", "hits": "1", "effect": ""}
]"#;

const LEADERS: &str = r#"[
    {"name": "Flynn", "stats": {"HP": 400, "MP": 100, "Str": 30, "Skl": 30, "Mag": 30, "Spd": 30, "Lck": 30},
     "affinity": {"Phys": "-", "Gun": "-", "Fire": "-", "Ice": "-", "Elec": "-", "Force": "-", "Light": "-", "Dark": "-"}},
    {"name": "Walter", "stats": {"HP": 380, "MP": 90, "Str": 32, "Skl": 25, "Mag": 28, "Spd": 26, "Lck": 20},
     "affinity": {"Phys": "-", "Gun": "-", "Fire": "-", "Ice": "-", "Elec": "-", "Force": "-", "Light": "-", "Dark": "-"}}
]"#;

const SUMMONABLES: &str = r#"[
    {"name": "Pixie", "stats": {"HP": 90, "MP": 60, "Str": 8, "Skl": 10, "Mag": 14, "Spd": 20, "Lck": 12},
     "affinity": {"Phys": "-", "Gun": "-", "Fire": "-", "Ice": "-", "Elec": "Dr", "Force": "-", "Light": "-", "Dark": "Wk"},
     "skills": ["Zio"]}
]"#;

fn write_catalog(dir: &Path) {
    fs::write(dir.join(CatalogLoader::SKILLS_FILE), SKILLS).unwrap();
    fs::write(dir.join(CatalogLoader::LEADERS_FILE), LEADERS).unwrap();
    fs::write(dir.join(CatalogLoader::SUMMONABLES_FILE), SUMMONABLES).unwrap();
}

#[test]
fn loads_catalog_and_roster_from_disk() {
    let data = TempDir::new().unwrap();
    write_catalog(data.path());
    let roster = data.path().join("001.txt");
    fs::write(
        &roster,
        "Player 1 Team\n[Samurai] Flynn (Agi)\nPixie\nPlayer 2 Team\n[Samurai] Walter\n",
    )
    .unwrap();

    let catalog = CatalogLoader::load(data.path()).unwrap();
    let (first, second) = RosterLoader::load(&roster, &catalog).unwrap();

    assert_eq!(first.leader().skills()[0].name, "Agi");
    assert_eq!(first.unit(UnitId(1)).unwrap().name(), "Pixie");
    assert_eq!(second.active_units(), vec![UnitId::LEADER]);
}

#[test]
fn invalid_roster_reports_the_path() {
    let data = TempDir::new().unwrap();
    write_catalog(data.path());
    let roster = data.path().join("bad.txt");
    fs::write(&roster, "Player 1 Team\nPixie\nPlayer 2 Team\n[Samurai] Walter\n").unwrap();

    let catalog = CatalogLoader::load(data.path()).unwrap();
    let error = RosterLoader::load(&roster, &catalog).unwrap_err();

    assert!(error.to_string().contains("bad.txt"));
}

#[test]
fn missing_catalog_file_fails() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join(CatalogLoader::SKILLS_FILE), SKILLS).unwrap();

    assert!(CatalogLoader::load(data.path()).is_err());
}

#[test]
fn team_files_are_sorted_text_files() {
    let dir = TempDir::new().unwrap();
    for name in ["010.txt", "002.txt", "notes.md", "001.txt"] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    fs::create_dir(dir.path().join("nested.txt")).unwrap();

    let names: Vec<String> = list_team_files(dir.path())
        .unwrap()
        .iter()
        .filter_map(|path| path.file_name()?.to_str().map(String::from))
        .collect();

    assert_eq!(names, vec!["001.txt", "002.txt", "010.txt"]);
}

#[test]
fn config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("battle.toml");
    fs::write(&path, "[combat]\nweak_multiplier = 2.0\n").unwrap();

    let config = ConfigLoader::load(&path).unwrap();

    assert_eq!(config.combat.weak_multiplier, 2.0);
    assert_eq!(config.combat.gun_modifier, BattleConfig::default().combat.gun_modifier);
}
