// End-to-end load through the config layer and the offline file transport.

use std::fs;
use std::path::PathBuf;

use pasta_app::config::load_config_from;
use pasta_app::{build_source, load_league, LoadError, Table, Transport};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("config")).unwrap();
    fs::create_dir_all(dir.join("data")).unwrap();
    dir
}

const LEAGUE_TOML: &str = r#"
[league]
name = "Offline Pasta"

[source]
transport = "files"
players_path = "data/players.json"
matches_path = "data/matches.csv"

[display]
top_n = 3
"#;

const PLAYERS_JSON: &str = r#"[
  {"Name": "Ana", "Description": "Keeps clean sheets"},
  {"Name": "Bo", "Description": ""},
  {"Name": "", "Description": "ghost row"},
  {"Name": "Cy"},
  {"Name": "Dee"}
]"#;

const MATCHES_CSV: &str = "\
Matchday,Player 1,Player 2,Score 1,Score 2
1,Ana,Bo,3,1
1,Cy,Dee,2,2
2,Ana,Cy,0,1
2,Bo,Dee,-1,-1
3,Ana,Dee,,
3,Bo,Cy,2,
,Eli,Ana,1,1
4,Bo,Bo,5,0
";

#[tokio::test]
async fn offline_league_loads_end_to_end() {
    let dir = scratch("pasta_file_league_ok");
    fs::write(dir.join("config/league.toml"), LEAGUE_TOML).unwrap();
    fs::write(dir.join("data/players.json"), PLAYERS_JSON).unwrap();
    fs::write(dir.join("data/matches.csv"), MATCHES_CSV).unwrap();

    let config = load_config_from(&dir).expect("config should load");
    assert_eq!(config.source.transport, Transport::Files);
    let source = build_source(&config.source).expect("source should build");
    let view = load_league(source.as_ref(), &config.league.name, &config.display)
        .await
        .expect("league should load");

    assert_eq!(view.league_name, "Offline Pasta");
    // Ghost row dropped; Eli joins through the match listing.
    assert_eq!(view.players.len(), 4);
    assert_eq!(view.standings.len(), 5);
    // Self-match on matchday 4 is dropped, the unscheduled match is kept.
    assert_eq!(view.match_count(), 7);
    let labels: Vec<String> = view.matchdays.iter().map(|g| g.label()).collect();
    assert_eq!(labels, vec!["Matchday 1", "Matchday 2", "Matchday 3", "Unscheduled"]);

    // Cy: D vs Dee 2-2, W vs Ana 1-0, L vs Bo 0-2 (missing side is zero).
    let cy = view.standings.iter().find(|r| r.player == "Cy").unwrap();
    assert_eq!(
        (cy.played, cy.wins, cy.draws, cy.losses, cy.points),
        (3, 1, 1, 1, 4)
    );
    assert_eq!((cy.goals_for, cy.goals_against), (3, 4));

    assert_eq!(view.top_scorers.len(), 3);
    assert_eq!(view.top_scorers[0].player, "Ana");
    assert_eq!(view.top_scorers[0].goals, 4);

    // Matchday 3 has the Bo-Cy result, so the slider starts there.
    assert_eq!(view.initial_matchday(), Some(2));

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn missing_matches_file_is_a_terminal_error() {
    let dir = scratch("pasta_file_league_missing");
    fs::write(dir.join("config/league.toml"), LEAGUE_TOML).unwrap();
    fs::write(dir.join("data/players.json"), PLAYERS_JSON).unwrap();

    let config = load_config_from(&dir).unwrap();
    let source = build_source(&config.source).unwrap();
    let err: LoadError = load_league(source.as_ref(), &config.league.name, &config.display)
        .await
        .unwrap_err();
    assert_eq!(err.table, Table::Matches);

    let _ = fs::remove_dir_all(&dir);
}
