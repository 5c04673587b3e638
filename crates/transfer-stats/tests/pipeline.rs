// Integration tests for a full report run driven by a config directory.

use std::fs;
use std::path::{Path, PathBuf};

use transfer_stats::config::{load_config, CONFIG_FILE};
use transfer_stats::run::{run, RunSummary};

const TRANSFERS: &str = "\
player,position,from,to,league,season,price
Eden Hazard,Forward,Chelsea,Real Madrid,La Liga,2019/20,115
Matthijs de Ligt,Defender,Ajax,Juventus,Serie A,2019/20,85.5
Eder Militao,Defender,Porto,Real Madrid,La Liga,2019/20,
Aaron Ramsey,Midfielder,Arsenal,Juventus,Serie A,2019/20,free
";

/// Temp base dir with `config/transfer-stats.toml` and `transfer_data.csv`.
fn setup(name: &str, request: &str) -> PathBuf {
    let tmp = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&tmp);
    fs::create_dir_all(tmp.join("config")).unwrap();
    fs::write(tmp.join("transfer_data.csv"), TRANSFERS).unwrap();
    fs::write(
        tmp.join("config").join(CONFIG_FILE),
        format!("[input]\ntransfers = \"transfer_data.csv\"\n\n[request]\n{request}\n"),
    )
    .unwrap();
    tmp
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

#[test]
fn full_run_writes_all_three_reports() {
    let dir = setup(
        "transfer_stats_pipeline_full",
        "clubs = \"Juventus, Real Madrid\"\nposition = \"defender\"",
    );
    let config = load_config(&dir).unwrap();

    let summary = run(&config).unwrap();
    assert_eq!(
        summary,
        RunSummary {
            transfers: 4,
            clubs: 2,
            leagues: 2,
            position_leagues: 2,
        }
    );

    assert_eq!(
        read(&dir, "club_stat.txt"),
        "\
Juventus
 -Matthijs de Ligt (Defender), from Ajax
 -Aaron Ramsey (Midfielder), from Arsenal
Real Madrid
 -Eden Hazard (Forward), from Chelsea
 -Eder Militao (Defender), from Porto
"
    );
    assert_eq!(
        read(&dir, "league_stat.txt"),
        "league,total_transfer_no,total_transfer_price\nLa Liga,2,115\nSerie A,2,85.5\n"
    );
    assert_eq!(
        read(&dir, "pos_stat.txt"),
        "La Liga\n2019/20,Eder Militao\n\nSerie A\n2019/20,Matthijs de Ligt\n\n"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn first_run_without_config_uses_built_in_defaults() {
    let dir = std::env::temp_dir().join("transfer_stats_pipeline_builtin");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("transfer_data.csv"), TRANSFERS).unwrap();

    let config = load_config(&dir).unwrap();
    let summary = run(&config).unwrap();
    assert_eq!(summary.clubs, 2);

    assert!(read(&dir, "club_stat.txt").starts_with("Real Madrid\n -Eden Hazard (Forward), from Chelsea\n"));
    assert!(dir.join("league_stat.txt").exists());
    assert!(dir.join("pos_stat.txt").exists());
    assert!(!dir.join("config").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_club_aborts_before_writing() {
    let dir = setup(
        "transfer_stats_pipeline_unknown_club",
        "clubs = [\"Juventus\", \"Nonexistent FC\", \"AlsoFake\"]\nposition = \"Defender\"",
    );
    let config = load_config(&dir).unwrap();

    let err = run(&config).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Nonexistent FC,AlsoFake"), "got: {msg}");
    assert!(!dir.join("club_stat.txt").exists());
    assert!(!dir.join("league_stat.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_position_aborts_run() {
    let dir = setup(
        "transfer_stats_pipeline_unknown_position",
        "clubs = []\nposition = \"Goalkeeper\"",
    );
    let config = load_config(&dir).unwrap();

    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("Goalkeeper"));
    assert!(!dir.join("pos_stat.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_transfer_file_is_an_error() {
    let dir = setup(
        "transfer_stats_pipeline_missing_csv",
        "clubs = []\nposition = \"Defender\"",
    );
    fs::remove_file(dir.join("transfer_data.csv")).unwrap();
    let config = load_config(&dir).unwrap();

    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("transfer_data.csv"));

    let _ = fs::remove_dir_all(&dir);
}
