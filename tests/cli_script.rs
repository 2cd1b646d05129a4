use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("depot_cli").unwrap();
    cmd.env("DEPOT_CLI_SCRIPT", "1")
        .env("DEPOT_DATA_DIR", data_dir);
    cmd
}

#[test]
fn fleet_scenario_runs_end_to_end() {
    let temp = tempdir().unwrap();
    let input = "add Smith 7\n\
                 show-park\n\
                 move-to-route 1\n\
                 show-route\n\
                 show-park\n\
                 move-to-route 1\n\
                 exit\n";

    script_cmd(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Bus 1 added to the park."))
        .stdout(contains("driver Smith"))
        .stdout(contains("Bus 1 moved to route."))
        .stdout(contains("not found in the park"))
        .stdout(contains("Data saved."));

    let json = std::fs::read_to_string(temp.path().join("buses.json")).unwrap();
    assert!(json.contains("Smith"));
    assert!(json.contains("OnRoute"));
}

#[test]
fn state_survives_across_sessions() {
    let temp = tempdir().unwrap();

    script_cmd(temp.path())
        .write_stdin("add Smith 7\nadd-client Anna 5550101\nexit\n")
        .assert()
        .success();

    script_cmd(temp.path())
        .write_stdin("show-park\nshow-clients\nexit\n")
        .assert()
        .success()
        .stdout(contains("driver Smith"))
        .stdout(contains("Anna"));
}

#[test]
fn credential_scenario_matches_expected_outcomes() {
    let temp = tempdir().unwrap();
    let input = "register alice pw1\n\
                 login alice pw1\n\
                 whoami\n\
                 login alice wrong\n\
                 register alice pw2\n\
                 exit\n";

    script_cmd(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("User `alice` registered."))
        .stdout(contains("Login successful."))
        .stdout(contains("Logged in as `alice`."))
        .stdout(contains("Invalid username or password."))
        .stdout(contains("username `alice` already exists"));
}

#[test]
fn credit_validation_rejects_bad_input_and_loop_continues() {
    let temp = tempdir().unwrap();
    let input = "add-credit abc 4.5 2030-01-01\n\
                 add-credit 100 4.5 2001-01-01\n\
                 add-credit 100 4.5 2099-01-01 working capital\n\
                 show-loans\n\
                 exit\n";

    script_cmd(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("amount must be numeric"))
        .stdout(contains("repayment date must be after the creation date"))
        .stdout(contains("Credit 1 issued."))
        .stdout(contains("working capital"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let temp = tempdir().unwrap();

    script_cmd(temp.path())
        .write_stdin("show-prak\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `show-prak`"))
        .stdout(contains("Suggestion: `show-park`?"));
}

#[test]
fn roster_commands_render_role_specific_lines() {
    let temp = tempdir().unwrap();
    let input = "add-person student \"Ivan Ivanov\" 20 IS-23-1 4.5\n\
                 add-person head \"Anna Smirnova\" 50 Programming 25 Informatics\n\
                 show-roster\n\
                 exit\n";

    script_cmd(temp.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Student: Ivan Ivanov, age 20"))
        .stdout(contains("Ivan Ivanov studies in group IS-23-1."))
        .stdout(contains("Heads the Informatics department"));
}
