use clap::Parser;

use dino_run::config::*;
use dino_run::entities::SpawnPolicy;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dino_run").chain(args.iter().copied())).unwrap()
}

#[test]
fn defaults_match_game_defaults() {
    let cli = parse(&[]);
    assert_eq!(cli.assets, std::path::PathBuf::from("assets"));
    assert_eq!(cli.seed, None);
    assert_eq!(cli.log_file, None);
    assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    assert_eq!(
        GameConfig::default().spawn,
        SpawnPolicy { min_interval: 30, max_interval: 90 }
    );
    assert_eq!(GameConfig::default().fps, 60);
}

#[test]
fn flags_override_defaults() {
    let cli = parse(&[
        "--fps", "30", "--seed", "42", "--spawn-min", "60", "--spawn-max", "60",
        "--assets", "art", "--log-file", "run.log",
    ]);
    assert_eq!(cli.seed, Some(42));
    assert_eq!(cli.assets, std::path::PathBuf::from("art"));
    let config = cli.game_config().unwrap();
    assert_eq!(config.fps, 30);
    assert_eq!(config.spawn, SpawnPolicy { min_interval: 60, max_interval: 60 });
}

#[test]
fn zero_fps_is_rejected() {
    assert_eq!(parse(&["--fps", "0"]).game_config(), Err(ConfigError::ZeroFps));
}

#[test]
fn inverted_spawn_range_is_rejected() {
    let err = parse(&["--spawn-min", "70", "--spawn-max", "40"])
        .game_config()
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptySpawnRange { min: 70, max: 40 });
    assert!(err.to_string().contains("70"));
}

#[test]
fn non_numeric_flag_fails_to_parse() {
    assert!(Cli::try_parse_from(["dino_run", "--seed", "abc"]).is_err());
}
