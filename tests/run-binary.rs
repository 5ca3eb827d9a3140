use assert_cmd::prelude::*;
use std::process::Command;

fn binary() -> Command {
    let mut cmd = Command::cargo_bin("puzzle-search").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_lights_out_print_solution() {
    let output = r"----------------------------------------
Lights Out (plus pattern)
1 1
1 0
Solution:
  (State 0)
1 1
1 0
  (State 1)
0 0
0 0
Toggles: (0, 0)
Expected toggles: 1
Found toggles: 1
";

    binary()
        .arg("--print-solution")
        .arg("lights-out")
        .arg("data/custom/one-toggle.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_eight_puzzle() {
    let output = r"----------------------------------------
Eight Puzzle
1 2 0
3 4 5
6 7 8
Moves: ll
Expected moves: 2
Found moves: 2
";

    binary()
        .arg("eight-puzzle")
        .arg("data/custom/two-moves.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");

    // same path without the heuristic
    binary()
        .arg("--no-heuristic")
        .arg("eight-puzzle")
        .arg("data/custom/two-moves.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = r"----------------------------------------
Lights Out (cross pattern)
1 0
0 0
No solution
";

    binary()
        .arg("lights-out")
        .arg("data/lights_out/unsolvable.txt")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_whole_files() {
    for &(problem, path, what) in &[
        ("lights-out", "data/lights_out/small.txt", "toggles"),
        ("eight-puzzle", "data/eight_puzzle/short.txt", "moves"),
    ] {
        let output = binary().arg("-s").arg(problem).arg(path).output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let expected: Vec<_> = stdout
            .lines()
            .filter(|line| line.starts_with(&format!("Expected {}: ", what)))
            .map(|line| line.rsplit(' ').next().unwrap().to_owned())
            .collect();
        let found: Vec<_> = stdout
            .lines()
            .filter(|line| line.starts_with(&format!("Found {}: ", what)))
            .map(|line| line.rsplit(' ').next().unwrap().to_owned())
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(expected, found);
        assert!(stdout.contains("States created total: "));
    }
}

#[test]
fn run_broken_file() {
    let output = binary()
        .arg("eight-puzzle")
        .arg("data/custom/broken.txt")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Wrong line length on line 1"));
}

#[test]
fn run_bad_args() {
    // doesn't check stderr - it's clap's job

    binary()
        .arg("sokoban")
        .arg("data/custom/one-toggle.txt")
        .assert()
        .failure()
        .stdout("");

    binary().arg("lights-out").assert().failure().stdout("");
}
