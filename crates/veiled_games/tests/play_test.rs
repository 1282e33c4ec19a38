//! Tests for the interactive session using scripted input.

use std::io::Cursor;
use veiled_games::{GameConfig, PlayStats, play};
use veiled_tictactoe::{FirstTie, MoveSelector};

fn quiet_config() -> GameConfig {
    GameConfig::default()
        .with_think_delay_ms(0)
        .with_reveal_delay_ms(0)
}

fn run(config: &GameConfig, script: &str) -> (PlayStats, String) {
    let mut selector = MoveSelector::new(config.selector_policy(), FirstTie);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let stats = play(config, &mut selector, &mut input, &mut output).expect("session runs");
    (stats, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_human_wins_along_hidden_top_row() {
    let (stats, out) = run(&quiet_config(), "0 0\n0,1\n2\nn\n");
    assert_eq!(
        stats,
        PlayStats {
            wins: 1,
            losses: 0,
            draws: 0
        }
    );
    assert!(out.contains("The board is bigger than it looked..."));
    assert!(out.contains("CPU plays (2, 2)"));
    assert!(out.contains("CPU plays (3, 2)"));
    assert!(out.contains("You win! Line: (0, 0) (0, 1) (0, 2)"));
}

#[test]
fn test_bad_input_reprompts() {
    let (stats, out) = run(&quiet_config(), "zz\n12\n12\nq\n");
    assert_eq!(stats, PlayStats::default());
    assert!(out.contains("Could not read a cell from \"zz\""));
    assert!(out.contains("CPU plays (1, 2)"));
    assert!(out.contains("Square 12 is already occupied"));
    assert_eq!(out.matches("Your turn (step 1)").count(), 2);
    assert_eq!(out.matches("Your turn (step 3)").count(), 2);
}

#[test]
fn test_cpu_opens_when_configured() {
    let config = quiet_config().with_human_moves_first(false);
    let (_, out) = run(&config, "q\n");
    let cpu = out.find("CPU plays (2, 2)").expect("CPU moved");
    let prompt = out.find("Your turn (step 2)").expect("human prompted");
    assert!(cpu < prompt);
}

#[test]
fn test_end_of_input_quits() {
    let (stats, out) = run(&quiet_config(), "");
    assert_eq!(stats, PlayStats::default());
    assert!(out.contains("Your turn (step 1)"));
}

#[test]
fn test_rematch_resets_board() {
    let (stats, out) = run(&quiet_config(), "0 0\n0 1\n0 2\ny\nq\n");
    assert_eq!(stats.wins, 1);
    assert_eq!(out.matches("Play again?").count(), 1);
    assert_eq!(out.matches("Your turn (step 1)").count(), 2);
}
