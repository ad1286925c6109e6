use std::fs;
use std::path::Path;

use battle_content::{Catalog, CatalogLoader, RosterParser};
use battle_core::{BattleConfig, BattleState, Side, Team, UnitId};
use battle_runtime::{BattleSession, Lobby, RuntimeError, ScriptedView, Transcript};
use tempfile::TempDir;

const SKILLS: &str = r#"[
    {"name": "Agi", "type": "Fire", "cost": 3, "power": 100, "target": "Single", "hits": "1", "effect": "Deals light Fire damage to one foe."},
    {"name": "Dia", "type": "Heal", "cost": 2, "power": 50, "target": "Ally", "hits": "", "effect": "Heals HP of one ally."},
    {"name": "Recarm", "type": "Heal", "cost": 5, "power": 50, "target": "Ally", "hits": "", "effect": "Revives one ally."}
]"#;

const LEADERS: &str = r#"[
    {"name": "Flynn", "stats": {"HP": 100, "MP": 20, "Str": 50, "Skl": 20, "Mag": 25, "Spd": 30, "Lck": 10},
     "affinity": {"Phys": "-", "Gun": "-", "Fire": "-", "Ice": "-", "Elec": "-", "Force": "-", "Light": "-", "Dark": "-"}},
    {"name": "Walter", "stats": {"HP": 60, "MP": 10, "Str": 10, "Skl": 10, "Mag": 10, "Spd": 10, "Lck": 10},
     "affinity": {"Phys": "-", "Gun": "-", "Fire": "Wk", "Ice": "-", "Elec": "-", "Force": "-", "Light": "-", "Dark": "-"}}
]"#;

const SUMMONABLES: &str = r#"[
    {"name": "Pixie", "stats": {"HP": 40, "MP": 20, "Str": 10, "Skl": 10, "Mag": 16, "Spd": 20, "Lck": 10},
     "affinity": {}, "skills": ["Dia", "Recarm", "Agi"]},
    {"name": "Slime", "stats": {"HP": 30, "MP": 0, "Str": 5, "Skl": 5, "Mag": 5, "Spd": 5, "Lck": 5},
     "affinity": {}, "skills": []},
    {"name": "Jack Frost", "stats": {"HP": 50, "MP": 10, "Str": 12, "Skl": 12, "Mag": 12, "Spd": 15, "Lck": 12},
     "affinity": {}, "skills": []},
    {"name": "Angel", "stats": {"HP": 45, "MP": 15, "Str": 11, "Skl": 11, "Mag": 11, "Spd": 25, "Lck": 11},
     "affinity": {}, "skills": []}
]"#;

const DUEL: &str = "Player 1 Team\n[Samurai] Flynn (Agi)\nPlayer 2 Team\n[Samurai] Walter\n";

const SEP: &str = "----------------------------------------";

fn catalog() -> Catalog {
    CatalogLoader::from_json(SKILLS, LEADERS, SUMMONABLES).unwrap()
}

fn teams(roster: &str) -> (Team, Team) {
    RosterParser::parse(roster, &catalog()).unwrap()
}

fn teams_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn lobby(dir: &Path) -> Lobby {
    Lobby::new(catalog(), BattleConfig::default(), dir)
}

fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|line| line.to_string()).collect()
}

/// Whether `needle` appears as a contiguous run of lines in `output`.
fn contains_run(output: &[String], needle: &[&str]) -> bool {
    output
        .windows(needle.len())
        .any(|window| window.iter().zip(needle).all(|(line, expected)| line == expected))
}

fn leader_menu(name: &str) -> Vec<String> {
    let mut menu = vec![format!("Seleccione una acción para {name}")];
    menu.extend(
        ["1: Atacar", "2: Disparar", "3: Usar Habilidad", "4: Invocar", "5: Pasar Turno", "6: Rendirse"]
            .map(String::from),
    );
    menu
}

fn duel_transcript() -> Vec<String> {
    let mut expected = lines(&[
        "Elige un archivo para cargar los equipos",
        "0: 001.txt",
        "INPUT: 0",
        SEP,
        "Ronda de Flynn (J1)",
        SEP,
        "Equipo de Flynn (J1)",
        "A-Flynn HP:100/100 MP:20/20",
        "B-",
        "C-",
        "D-",
        "Equipo de Walter (J2)",
        "A-Walter HP:60/60 MP:10/10",
        "B-",
        "C-",
        "D-",
        SEP,
        "Full Turns: 1",
        "Blinking Turns: 0",
        SEP,
        "Orden:",
        "1-Flynn",
        SEP,
    ]);
    expected.extend(leader_menu("Flynn"));
    expected.extend(lines(&[
        "INPUT: 1",
        SEP,
        "Seleccione un objetivo para Flynn",
        "1-Walter HP:60/60 MP:10/10",
        "2-Cancelar",
        "INPUT: 1",
        SEP,
        "Flynn ataca a Walter",
        "Walter recibe 30 de daño",
        "Walter termina con HP:30/60",
        SEP,
        "Se han consumido 1 Full Turn(s) y 0 Blinking Turn(s)",
        "Se han obtenido 0 Blinking Turn(s)",
        SEP,
        "Ronda de Walter (J2)",
        SEP,
        "Equipo de Flynn (J1)",
        "A-Flynn HP:100/100 MP:20/20",
        "B-",
        "C-",
        "D-",
        "Equipo de Walter (J2)",
        "A-Walter HP:30/60 MP:10/10",
        "B-",
        "C-",
        "D-",
        SEP,
        "Full Turns: 1",
        "Blinking Turns: 0",
        SEP,
        "Orden:",
        "1-Walter",
        SEP,
    ]));
    expected.extend(leader_menu("Walter"));
    expected.extend(lines(&[
        "INPUT: 6",
        SEP,
        "Walter (J2) se rinde",
        SEP,
        "Ganador: Flynn (J1)",
    ]));
    expected
}

#[test]
fn full_duel_matches_transcript() {
    let dir = teams_dir(&[("001.txt", DUEL)]);
    let report = lobby(dir.path())
        .play(ScriptedView::new(["0", "1", "1", "6"]))
        .unwrap();

    assert_eq!(report.winner, Some(Side::J1));
    assert_eq!(report.view.output(), duel_transcript().as_slice());
}

#[test]
fn transcript_replay_round_trip() {
    let dir = teams_dir(&[("001.txt", DUEL)]);
    let transcript = Transcript::parse(&duel_transcript().join("\n"));

    let report = lobby(dir.path()).play(transcript.view()).unwrap();

    assert!(transcript.compare(report.view.output()).is_ok());
}

#[test]
fn out_of_range_file_is_an_invalid_team() {
    let dir = teams_dir(&[("001.txt", DUEL)]);
    let report = lobby(dir.path()).play(ScriptedView::new(["5"])).unwrap();

    assert_eq!(report.winner, None);
    assert_eq!(
        report.view.output(),
        lines(&[
            "Elige un archivo para cargar los equipos",
            "0: 001.txt",
            "INPUT: 5",
            "Archivo de equipos inválido",
        ])
        .as_slice()
    );
}

#[test]
fn broken_roster_is_an_invalid_team() {
    let dir = teams_dir(&[
        ("001.txt", DUEL),
        ("002.txt", "Player 1 Team\n[Samurai] Flynn\nMothman\nPlayer 2 Team\n[Samurai] Walter\n"),
    ]);
    let report = lobby(dir.path()).play(ScriptedView::new(["1"])).unwrap();

    assert_eq!(report.winner, None);
    assert_eq!(
        report.view.output().last().map(String::as_str),
        Some("Archivo de equipos inválido")
    );
}

#[test]
fn unreadable_file_choice_selects_the_first_file() {
    let dir = teams_dir(&[("001.txt", DUEL), ("002.txt", DUEL)]);
    let report = lobby(dir.path())
        .play(ScriptedView::new(["first", "6"]))
        .unwrap();

    assert_eq!(report.winner, Some(Side::J2));
    assert!(contains_run(
        report.view.output(),
        &["INPUT: 6", SEP, "Flynn (J1) se rinde", SEP, "Ganador: Walter (J2)"]
    ));
}

#[test]
fn invalid_choices_and_cancelled_actions_reprompt() {
    let (first, second) = teams(DUEL);
    let state = BattleState::new(first, second);
    let view = ScriptedView::new(["x", "1", "2", "5", "6"]);
    let mut session = BattleSession::new(state, BattleConfig::default(), view);

    assert_eq!(session.run().unwrap(), Side::J2);
    let output = session.view().output();

    // Unreadable token: menu again, no separator.
    let mut rejected = vec!["INPUT: x".to_string()];
    rejected.extend(leader_menu("Flynn"));
    rejected.push("INPUT: 1".to_string());
    assert!(output.windows(rejected.len()).any(|window| window == rejected.as_slice()));

    // Cancelled target selection: separator, then the menu.
    let mut cancelled = vec!["2-Cancelar".to_string(), "INPUT: 2".to_string(), SEP.to_string()];
    cancelled.extend(leader_menu("Flynn"));
    assert!(output.windows(cancelled.len()).any(|window| window == cancelled.as_slice()));

    // Passing with no blinking turns converts a full turn.
    assert!(contains_run(
        output,
        &[
            "INPUT: 5",
            SEP,
            "Se han consumido 1 Full Turn(s) y 0 Blinking Turn(s)",
            "Se han obtenido 1 Blinking Turn(s)",
            SEP,
        ]
    ));
    assert!(contains_run(output, &["Full Turns: 0", "Blinking Turns: 1"]));
}

#[test]
fn weak_skill_finishes_the_match() {
    let (first, second) = teams(DUEL);
    let state = BattleState::new(first, second);
    let view = ScriptedView::new(["3", "1", "1"]);
    let mut session = BattleSession::new(state, BattleConfig::default(), view);

    assert_eq!(session.run().unwrap(), Side::J1);
    assert_eq!(session.context(Side::J1).skill_uses(), 1);
    assert_eq!(session.state().team(Side::J1).leader().mp(), 17);

    let output = session.view().output();
    assert!(contains_run(
        output,
        &[
            "INPUT: 3",
            SEP,
            "Seleccione una habilidad para que Flynn use",
            "1-Agi MP:3",
            "2-Cancelar",
            "INPUT: 1",
            SEP,
            "Seleccione un objetivo para Flynn",
            "1-Walter HP:60/60 MP:10/10",
            "2-Cancelar",
            "INPUT: 1",
            SEP,
            "Flynn lanza fuego a Walter",
            "Walter es débil contra el ataque de Flynn",
            "Walter recibe 75 de daño",
            "Walter termina con HP:0/60",
            SEP,
            "Se han consumido 1 Full Turn(s) y 0 Blinking Turn(s)",
            "Se han obtenido 1 Blinking Turn(s)",
            SEP,
            "Ganador: Flynn (J1)",
        ]
    ));
}

const SQUAD: &str = "Player 1 Team\n[Samurai] Flynn\nPixie\nSlime\nJack Frost\nAngel\nPlayer 2 Team\n[Samurai] Walter\n";

#[test]
fn summons_take_over_queue_positions() {
    let (first, second) = teams(SQUAD);
    let state = BattleState::new(first, second);
    // Flynn summons Angel over Slime, then Pixie swaps itself for Slime.
    let view = ScriptedView::new(["4", "1", "2", "3", "1"]);
    let mut session = BattleSession::new(state, BattleConfig::default(), view);

    assert!(matches!(session.run(), Err(RuntimeError::FeedExhausted)));

    let output = session.view().output();
    assert!(contains_run(
        output,
        &[
            "Orden:",
            "1-Flynn",
            "2-Pixie",
            "3-Jack Frost",
            "4-Slime",
        ]
    ));
    assert!(contains_run(
        output,
        &[
            SEP,
            "Seleccione una posición para invocar",
            "1-Pixie HP:40/40 MP:20/20 (Puesto 2)",
            "2-Slime HP:30/30 MP:0/0 (Puesto 3)",
            "3-Jack Frost HP:50/50 MP:10/10 (Puesto 4)",
            "4-Cancelar",
            "INPUT: 2",
            SEP,
            "Angel ha sido invocado",
            SEP,
            "Se han consumido 1 Full Turn(s) y 0 Blinking Turn(s)",
            "Se han obtenido 1 Blinking Turn(s)",
        ]
    ));
    assert!(contains_run(
        output,
        &["Orden:", "1-Pixie", "2-Jack Frost", "3-Angel", "4-Flynn"]
    ));
    assert!(contains_run(
        output,
        &[
            SEP,
            "Seleccione un monstruo para invocar",
            "1-Slime HP:30/30 MP:0/0",
            "2-Cancelar",
            "INPUT: 1",
            SEP,
            "Slime ha sido invocado",
            SEP,
            "Se han consumido 0 Full Turn(s) y 1 Blinking Turn(s)",
            "Se han obtenido 0 Blinking Turn(s)",
        ]
    ));
    assert!(contains_run(
        output,
        &["Orden:", "1-Jack Frost", "2-Angel", "3-Flynn", "4-Slime"]
    ));

    let team = session.state().team(Side::J1);
    assert_eq!(team.occupant(1), Some(UnitId(2)));
    assert_eq!(team.occupant(2), Some(UnitId(4)));
    assert_eq!(team.reserve(), &[UnitId(1)]);
}

const HEALERS: &str = "Player 1 Team\n[Samurai] Flynn\nPixie\nSlime\nPlayer 2 Team\n[Samurai] Walter\n";

#[test]
fn heal_and_revive_allies() {
    let (mut first, second) = teams(HEALERS);
    first.get_mut(UnitId::LEADER).unwrap().take_damage(60);
    first.get_mut(UnitId(2)).unwrap().kill();
    assert!(first.bench_if_fallen(UnitId(2)));

    let state = BattleState::new(first, second);
    // Flynn passes; Pixie heals Flynn; Flynn passes; Pixie revives Slime.
    let view = ScriptedView::new(["5", "2", "1", "1", "5", "2", "2", "1"]);
    let mut session = BattleSession::new(state, BattleConfig::default(), view);

    assert!(matches!(session.run(), Err(RuntimeError::FeedExhausted)));

    let output = session.view().output();
    assert!(contains_run(
        output,
        &[
            SEP,
            "Seleccione una habilidad para que Pixie use",
            "1-Dia MP:2",
            "2-Recarm MP:5",
            "3-Agi MP:3",
            "4-Cancelar",
            "INPUT: 1",
            SEP,
            "Seleccione un objetivo para Pixie",
            "1-Flynn HP:40/100 MP:20/20",
            "2-Pixie HP:40/40 MP:20/20",
            "3-Cancelar",
            "INPUT: 1",
            SEP,
            "Pixie cura a Flynn",
            "Flynn recibe 50 de HP",
            "Flynn termina con HP:90/100",
            SEP,
            "Se han consumido 0 Full Turn(s) y 1 Blinking Turn(s)",
            "Se han obtenido 0 Blinking Turn(s)",
        ]
    ));
    assert!(contains_run(
        output,
        &[
            "Seleccione un objetivo para Pixie",
            "1-Slime HP:0/30 MP:0/0",
            "2-Cancelar",
            "INPUT: 1",
            SEP,
            "Pixie revive a Slime",
            "Slime recibe 15 de HP",
            "Slime termina con HP:15/30",
        ]
    ));

    let team = session.state().team(Side::J1);
    assert_eq!(team.get(UnitId(2)).unwrap().hp(), 15);
    assert_eq!(team.reserve(), &[UnitId(2)]);
    assert_eq!(team.get(UnitId(1)).unwrap().mp(), 13);
    assert_eq!(session.context(Side::J1).skill_uses(), 2);
}
