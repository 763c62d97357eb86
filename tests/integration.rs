//! Integration tests for the yambot binary.
//!
//! Spawns the engine process, sends commands via stdin, and verifies stdout
//! responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Runs the engine with `args`, sends `commands` and collects stdout lines.
fn run_engine_with_args(args: &[&str], commands: &[String]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_yambot");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start yambot");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn run_engine(commands: &[&str]) -> Vec<String> {
    let commands: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
    run_engine_with_args(&[], &commands)
}

const CATEGORIES: [&str; 14] = [
    "ones", "twos", "threes", "fours", "fives", "sixes", "max", "min", "twopairs", "three", "straight", "full",
    "poker", "yamb",
];

/// Commands for one turn that rolls `1 1 2 2 2` three times and fills the cell.
fn turn_commands(category: &str, column: &str) -> Vec<String> {
    let announce = if column == "announced" {
        format!(" announce {}", category)
    } else {
        String::new()
    };
    vec![
        "roll 1 1 2 2 2".to_string(),
        format!("keep 2 3 0 0 0 0{}", announce),
        "roll 1 1 2 2 2".to_string(),
        "keep 2 3 0 0 0 0".to_string(),
        "roll 1 1 2 2 2".to_string(),
        format!("fill {} {}", category, column),
    ]
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, ["readyok"]);
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_engine(&["", "   ", "isready", "quit"]);
    assert_eq!(lines, ["readyok"]);
}

#[test]
fn unknown_commands_are_rejected_and_session_continues() {
    let lines = run_engine(&["foobar", "isready", "quit"]);
    assert_eq!(lines, ["rejected unknown command 'foobar'", "readyok"]);
}

#[test]
fn quit_stops_reading() {
    let lines = run_engine(&["quit", "isready"]);
    assert!(lines.is_empty());
}

#[test]
fn one_turn_scores_full_house() {
    let mut commands = turn_commands("full", "free");
    commands.push("quit".to_string());
    let lines = run_engine_with_args(&[], &commands);
    assert_eq!(lines[0], "ok roll 1 dice 1 1 2 2 2 counts 1:2, 2:3, 3:0, 4:0, 5:0, 6:0");
    assert_eq!(lines[1], "ok kept 2 3 0 0 0 0 next roll 2");
    assert_eq!(lines[3], "ok kept 2 3 0 0 0 0 next roll 3");
    assert_eq!(lines[5], "ok filled full/free score 48");
}

#[test]
fn keeping_unrolled_dice_is_rejected() {
    let lines = run_engine(&["roll 1 1 2 2 2", "keep 0 0 1 0 0 0", "status", "quit"]);
    assert_eq!(lines[1], "rejected cannot keep 1 dice showing 3, only 0 rolled");
    assert_eq!(lines[2], "status roll 1 dice 1 1 2 2 2 announced none filled 0/56");
}

#[test]
fn negative_keep_is_rejected_by_the_parser() {
    let lines = run_engine(&["roll 1 1 2 2 2", "keep 0 -1 0 0 0 0", "quit"]);
    assert_eq!(lines[1], "rejected keep count for face 2 must not be negative, got -1");
}

#[test]
fn down_column_fills_in_order() {
    let mut commands = turn_commands("twos", "down");
    commands.extend(turn_commands("ones", "down"));
    commands.push("feasible".to_string());
    commands.push("quit".to_string());
    let lines = run_engine_with_args(&[], &commands);
    assert_eq!(
        lines[5],
        "rejected infeasible cell: down column needs ones next, not twos"
    );
    // The rejected fill leaves roll 3 open for another choice.
    assert_eq!(lines[6], "ok roll 3 dice 1 1 2 2 2 counts 1:2, 2:3, 3:0, 4:0, 5:0, 6:0");
    let feasible = lines.last().unwrap();
    assert!(feasible.starts_with("feasible "));
    assert!(feasible.contains("twos/down"));
    assert!(!feasible.contains("ones/down"));
}

#[test]
fn announcement_can_only_be_made_on_first_roll() {
    let lines = run_engine(&[
        "roll 6 6 6 1 2",
        "keep 0 0 0 0 0 3",
        "roll 6 6 6 6 2",
        "keep 0 0 0 0 0 4 announce poker",
        "quit",
    ]);
    assert_eq!(lines[3], "rejected cannot announce after roll 2");
}

#[test]
fn announced_cell_is_the_only_announced_option() {
    let lines = run_engine(&[
        "roll 6 6 6 1 2",
        "keep 0 0 0 0 0 3 announce yamb",
        "roll 6 6 6 6 6",
        "keep 0 0 0 0 0 5",
        "roll 6 6 6 6 6",
        "feasible",
        "fill poker announced",
        "fill yamb announced",
        "quit",
    ]);
    assert_eq!(lines[1], "ok kept 0 0 0 0 0 3 announced yamb next roll 2");
    assert!(lines[5].contains("yamb/announced"));
    assert!(!lines[5].contains("poker/announced"));
    assert!(lines[6].starts_with("rejected "));
    assert_eq!(lines[7], "ok filled yamb/announced score 90");
}

#[test]
fn seeded_runs_roll_the_same_dice() {
    let commands = vec!["roll".to_string(), "quit".to_string()];
    let a = run_engine_with_args(&["--seed", "5"], &commands);
    let b = run_engine_with_args(&["--seed", "5"], &commands);
    assert_eq!(a.len(), 1);
    assert!(a[0].starts_with("ok roll 1 dice "));
    assert_eq!(a, b);
}

#[test]
fn rules_file_binds_the_announcement() {
    let path = std::env::temp_dir().join(format!("yambot-rules-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "announcement_binds_turn": true }"#).unwrap();

    let commands: Vec<String> = [
        "roll 5 5 5 5 1",
        "keep 0 0 0 0 4 0 announce poker",
        "roll 5 5 5 5 2",
        "keep 0 0 0 0 4 0",
        "roll 5 5 5 5 3",
        "fill poker free",
        "fill poker announced",
        "quit",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    let lines = run_engine_with_args(&["--rules", path.to_str().unwrap()], &commands);
    std::fs::remove_file(&path).ok();

    assert_eq!(lines[5], "rejected announced poker, so poker/free cannot be filled");
    assert_eq!(lines[6], "ok filled poker/announced score 70");
}

#[test]
fn setoption_applies_to_the_running_game() {
    let lines = run_engine(&[
        "setoption name AnnouncementBindsTurn value true",
        "setoption name Bogus value 1",
        "setoption name UpperBonus",
        "quit",
    ]);
    assert_eq!(lines[0], "ok AnnouncementBindsTurn");
    assert_eq!(lines[1], "rejected unknown option 'Bogus'");
    assert_eq!(lines[2], "rejected option 'UpperBonus' needs a value");
}

#[test]
fn full_game_reaches_game_over() {
    let mut commands = Vec::new();
    for category in CATEGORIES {
        commands.extend(turn_commands(category, "down"));
    }
    for category in CATEGORIES.iter().rev() {
        commands.extend(turn_commands(category, "up"));
    }
    for category in CATEGORIES {
        commands.extend(turn_commands(category, "free"));
    }
    for category in CATEGORIES {
        commands.extend(turn_commands(category, "announced"));
    }
    commands.push("score".to_string());
    commands.push("roll".to_string());
    commands.push("quit".to_string());

    let lines = run_engine_with_args(&[], &commands);
    assert!(
        !lines.iter().any(|l| l.starts_with("rejected ") && !l.contains("game over")),
        "unexpected rejection: {:?}",
        lines.iter().find(|l| l.starts_with("rejected "))
    );

    // Per column: upper 8, middle (8 - 8) * 2, lower 16 + 26 + 48.
    let over = lines.iter().position(|l| l.starts_with("gameover")).unwrap();
    assert_eq!(lines[over], "gameover total 392");
    let total = lines.iter().find(|l| l.starts_with("Total")).unwrap();
    assert_eq!(total.split_whitespace().collect::<Vec<_>>(), ["Total", "392"]);
    assert_eq!(lines.last().unwrap(), "rejected game over, send newgame to start again");
}

#[test]
fn newgame_starts_over() {
    let mut commands = turn_commands("yamb", "up");
    commands.push("newgame".to_string());
    commands.push("status".to_string());
    commands.push("quit".to_string());
    let lines = run_engine_with_args(&[], &commands);
    assert_eq!(lines[6], "ok newgame");
    assert_eq!(lines[7], "status roll 1 dice none announced none filled 0/56");
}

#[test]
fn only_announced_cells_left_forces_an_announcement() {
    let mut commands = Vec::new();
    for category in CATEGORIES {
        commands.extend(turn_commands(category, "down"));
    }
    for category in CATEGORIES.iter().rev() {
        commands.extend(turn_commands(category, "up"));
    }
    for category in CATEGORIES {
        commands.extend(turn_commands(category, "free"));
    }
    let played = commands.len();
    commands.extend(
        [
            "setoption name ForcedAnnouncement value false",
            "roll 1 1 2 2 2",
            "keep 2 3 0 0 0 0",
            "keep 2 3 0 0 0 0 announce full",
            "roll 1 1 2 2 2",
            "keep 2 3 0 0 0 0",
            "roll 1 1 2 2 2",
            "feasible",
            "fill full announced",
            "quit",
        ]
        .iter()
        .map(|c| c.to_string()),
    );

    let lines = run_engine_with_args(&[], &commands);
    let tail = &lines[played..];
    assert_eq!(tail[0], "rejected unknown option 'ForcedAnnouncement'");
    assert_eq!(tail[2], "rejected only announced cells remain, so roll 1 must announce");
    assert_eq!(tail[3], "ok kept 2 3 0 0 0 0 announced full next roll 2");
    assert_eq!(tail[7], "feasible full/announced");
    assert_eq!(tail[8], "ok filled full/announced score 48");
}
