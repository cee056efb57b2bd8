use super::*;

#[test]
fn test_cli_build() {
    let app = build_cli();
    assert_eq!(app.get_name(), "muxlay");
}

#[test]
fn test_cli_requires_subcommand() {
    let app = build_cli();
    assert!(app.try_get_matches_from(vec!["muxlay"]).is_err());
}

#[test]
fn test_cli_load_command() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["muxlay", "load", "work.json", "--trace"]);
    assert!(matches.is_ok());

    let matches = matches.unwrap();
    let load_matches = matches.subcommand_matches("load").unwrap();
    assert_eq!(
        load_matches.get_one::<String>("layout").unwrap(),
        "work.json"
    );
    assert!(load_matches.get_flag("trace"));
    assert!(!load_matches.get_flag("fixed-split"));
}

#[test]
fn test_cli_load_without_layout() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["muxlay", "load"]).unwrap();
    let load_matches = matches.subcommand_matches("load").unwrap();
    assert!(load_matches.get_one::<String>("layout").is_none());
}

#[test]
fn test_cli_load_tmux_override() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["muxlay", "load", "--tmux", "/opt/tmux", "--fixed-split"])
        .unwrap();
    let load_matches = matches.subcommand_matches("load").unwrap();
    assert_eq!(load_matches.get_one::<String>("tmux").unwrap(), "/opt/tmux");
    assert!(load_matches.get_flag("fixed-split"));
}

#[test]
fn test_cli_check_offline() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["muxlay", "check", "dev", "--offline"])
        .unwrap();
    let check_matches = matches.subcommand_matches("check").unwrap();
    assert_eq!(check_matches.get_one::<String>("layout").unwrap(), "dev");
    assert!(check_matches.get_flag("offline"));
}

#[test]
fn test_cli_plan_json_flag() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["muxlay", "plan", "--json", "--offline"])
        .unwrap();
    let plan_matches = matches.subcommand_matches("plan").unwrap();
    assert!(plan_matches.get_flag("json"));
    assert!(plan_matches.get_flag("offline"));
}

#[test]
fn test_cli_trace_only_on_load() {
    let app = build_cli();
    assert!(
        app.try_get_matches_from(vec!["muxlay", "plan", "--trace"])
            .is_err()
    );
}

#[test]
fn test_cli_example_format() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["muxlay", "example"]).unwrap();
    let example_matches = matches.subcommand_matches("example").unwrap();
    assert_eq!(example_matches.get_one::<String>("format").unwrap(), "json");

    let app = build_cli();
    assert!(
        app.try_get_matches_from(vec!["muxlay", "example", "--format", "yaml"])
            .is_err()
    );
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["muxlay", "check", "-v", "--no-color"])
        .unwrap();
    assert!(matches.get_flag("verbose"));
    assert!(matches.get_flag("no-color"));
}
