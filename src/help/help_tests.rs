use super::{build_command, plan_args, render_help};
use crate::program::ProgramSpec;
use crate::registry::{ArgKind, ArgumentDescriptor, ArgumentRegistry};
use clap::error::ErrorKind;

const LONG_HELP: &str =
    "one two three four five six seven eight nine ten eleven twelve thirteen fourteen";

fn spec_with(args: Vec<ArgumentDescriptor>) -> ProgramSpec {
    let mut spec = ProgramSpec::default();
    spec.args = ArgumentRegistry::from_entries(args);
    spec
}

fn option_lines(help: &str) -> Vec<&str> {
    help.lines()
        .filter(|line| line.trim_start().starts_with('-'))
        .collect()
}

#[test]
fn default_design_renders_verbose_flag() {
    let help = render_help(&ProgramSpec::default()).expect("render");
    assert!(help.contains("A sample CLI tool"), "{help}");
    assert!(help.contains("Usage: mycli"), "{help}");
    let verbose = help
        .lines()
        .find(|line| line.contains("-v, --verbose"))
        .expect("verbose line");
    assert!(verbose.contains("Enable verbose output"), "{help}");
    let usage_at = help.find("Usage:").expect("usage");
    let verbose_at = help.find("-v, --verbose").expect("verbose");
    assert!(usage_at < verbose_at);
}

#[test]
fn blank_flags_are_skipped_and_order_is_kept() {
    let spec = spec_with(vec![
        ArgumentDescriptor::new("alpha", "--alpha", "first", ArgKind::Flag),
        ArgumentDescriptor::new("skipped", "  ", "skipped help", ArgKind::Flag),
        ArgumentDescriptor::new("charlie", "--charlie", "second", ArgKind::Option),
        ArgumentDescriptor::new("bravo", "-b, --bravo", "third", ArgKind::Flag),
    ]);
    let help = render_help(&spec).expect("render");
    assert!(!help.contains("skipped help"), "{help}");

    let lines = option_lines(&help);
    // three descriptors plus the built-in help switch
    assert_eq!(lines.len(), 4, "{help}");
    assert!(lines[0].contains("--alpha"));
    assert!(lines[1].contains("--charlie"));
    assert!(lines[2].contains("--bravo"));
    assert!(lines[3].contains("--help"));
}

#[test]
fn options_show_value_name_from_descriptor_name() {
    let spec = spec_with(vec![ArgumentDescriptor::new(
        "output",
        "-o, --output",
        "Write to a file",
        ArgKind::Option,
    )]);
    let help = render_help(&spec).expect("render");
    assert!(help.contains("-o, --output <OUTPUT>"), "{help}");
}

#[test]
fn unnamed_option_falls_back_to_flag_name() {
    let spec = spec_with(vec![ArgumentDescriptor::new(
        "",
        "--log-file",
        "Where to log",
        ArgKind::Option,
    )]);
    let plans = plan_args(&spec).expect("plan");
    assert_eq!(plans[0].label, "log_file");
    assert_eq!(plans[0].value_name, "LOG_FILE");
}

#[test]
fn width_controls_wrapping() {
    let mut spec = spec_with(vec![ArgumentDescriptor::new(
        "verbose",
        "-v, --verbose",
        LONG_HELP,
        ArgKind::Flag,
    )]);
    spec.set_width(120);
    let wide = render_help(&spec).expect("render wide");
    assert!(wide.contains(LONG_HELP), "{wide}");

    spec.set_width(40);
    let narrow = render_help(&spec).expect("render narrow");
    assert!(!narrow.contains(LONG_HELP), "{narrow}");
    assert!(narrow.contains("fourteen"), "{narrow}");
}

#[test]
fn command_carries_name_and_about() {
    let spec = ProgramSpec::default();
    let command = build_command(&spec).expect("build");
    assert_eq!(command.get_name(), "mycli");
    assert_eq!(
        command.get_about().map(ToString::to_string).as_deref(),
        Some("A sample CLI tool")
    );
}

#[test]
fn help_at_run_time_matches_preview_whatever_the_binary_is_called() {
    let mut spec = spec_with(vec![
        ArgumentDescriptor::new("verbose", "-v, --verbose", "Be loud", ArgKind::Flag),
        ArgumentDescriptor::new("output", "-o, --output", "Write to a file", ArgKind::Option),
    ]);
    spec.set_width(60);
    let preview = render_help(&spec).expect("render");
    let err = build_command(&spec)
        .expect("build")
        .try_get_matches_from(["./target/debug/cli", "--help"])
        .expect_err("help exits early");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let shown = err.render().to_string();
    assert!(shown.contains("Usage: mycli [OPTIONS]"), "{shown}");
    assert_eq!(shown, preview);
}

#[test]
fn malformed_flags_are_errors_not_panics() {
    let spec = spec_with(vec![ArgumentDescriptor::new(
        "verbose",
        "verbose",
        "",
        ArgKind::Flag,
    )]);
    let err = render_help(&spec).expect_err("missing dash");
    assert!(err.to_string().starts_with("argument 1:"), "{err}");
}

#[test]
fn builtin_help_flags_are_reserved() {
    let spec = spec_with(vec![ArgumentDescriptor::new(
        "host",
        "-h, --host",
        "",
        ArgKind::Option,
    )]);
    let err = render_help(&spec).expect_err("reserved");
    assert!(err.to_string().contains("built-in help"), "{err}");
}

#[test]
fn duplicate_flags_name_both_rows() {
    let spec = spec_with(vec![
        ArgumentDescriptor::new("verbose", "-v, --verbose", "", ArgKind::Flag),
        ArgumentDescriptor::new("version", "-v, --version", "", ArgKind::Flag),
    ]);
    let err = render_help(&spec).expect_err("duplicate");
    let message = err.to_string();
    assert!(message.contains("argument 2"), "{message}");
    assert!(message.contains("argument 1"), "{message}");

    let repeated = spec_with(vec![ArgumentDescriptor::new("v", "-v -v", "", ArgKind::Flag)]);
    let err = render_help(&repeated).expect_err("repeated");
    assert!(err.to_string().contains("listed twice"), "{err}");
}

#[test]
fn empty_program_name_is_rejected() {
    let mut spec = ProgramSpec::default();
    spec.name = "  ".to_string();
    assert!(render_help(&spec).is_err());
}

#[test]
fn empty_description_is_omitted() {
    let mut spec = ProgramSpec::default();
    spec.description = String::new();
    let help = render_help(&spec).expect("render");
    assert!(help.trim_start().starts_with("Usage: mycli"), "{help}");
}
