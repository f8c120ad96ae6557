use assert_cmd::Command;
use predicates::str::contains;

fn script(input: &str) -> Command {
    let mut cmd = Command::cargo_bin("subtally_cli").unwrap();
    cmd.env("SUBTALLY_CLI_SCRIPT", "1").write_stdin(input.to_string());
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    script("add YouTube 980 month\nadd Netflix 1500 year\nperiod year\ntotal\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added `YouTube`."))
        .stdout(contains("Total: 13260 / year"));
}

#[test]
fn monthly_and_daily_projections_render_with_unit_suffixes() {
    script(
        "add YouTube 980 month\nadd Netflix 1500 year\ntotal\nperiod day\ntotal\nexit\n",
    )
    .assert()
    .success()
    .stdout(contains("Total: 1105 / month"))
    .stdout(contains("Total: 36.33 / day"));
}

#[test]
fn toggling_excludes_an_entry_from_the_total() {
    script(
        "add YouTube 980 month\nadd Netflix 1500 year\ntoggle 1\nperiod year\ntotal\nexit\n",
    )
    .assert()
    .success()
    .stdout(contains("`YouTube` is excluded from the total."))
    .stdout(contains("Total: 1500 / year"));
}

#[test]
fn removing_a_row_updates_the_list() {
    script("add YouTube 980 month\nadd Netflix 1500 year\nremove 2\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Removed `Netflix`."))
        .stdout(contains("YouTube"));
}

#[test]
fn quoted_names_are_a_single_argument() {
    script("add \"YouTube Premium\" 980 month\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("YouTube Premium"));
}

#[test]
fn invalid_price_is_reported_not_stored() {
    script("add YouTube abc month\nperiod year\ntotal\nexit\n")
        .assert()
        .success()
        .stdout(contains("is not a numeric price"))
        .stdout(contains("Total: 0 / year"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    script("tottal\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `tottal`"))
        .stdout(contains("Suggestion: `total`?"));
}

#[test]
fn json_dump_contains_the_entries() {
    script("add Netflix 1500 year\njson\nexit\n")
        .assert()
        .success()
        .stdout(contains("\"name\": \"Netflix\""))
        .stdout(contains("\"period\": \"year\""));
}
