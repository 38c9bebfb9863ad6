//! Code exporter: turns a design into a standalone clap program.
//!
//! The generated program rebuilds the same `Command` the preview is rendered
//! from, so running it with `--help` prints the previewed menu.
use crate::help::{build_command, plan_args, ArgPlan};
use crate::program::ProgramSpec;
use crate::registry::ArgKind;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed file name written by every export.
pub const EXPORT_FILE_NAME: &str = "cli.rs";

const CLAP_REQUIREMENT: &str = r#"clap = { version = "4.5", features = ["wrap_help"] }"#;

/// Generate the source text of a program equivalent to the design.
pub fn generate_code(spec: &ProgramSpec) -> Result<String> {
    // Validates the name and flags the same way the preview does.
    build_command(spec)?;
    let plans = plan_args(spec)?;

    let mut code = String::new();
    code.push_str("//! Generated by help-designer.\n");
    code.push_str("//!\n");
    code.push_str("//! ```cargo\n");
    code.push_str("//! [dependencies]\n");
    code.push_str(&format!("//! {CLAP_REQUIREMENT}\n"));
    code.push_str("//! ```\n");
    code.push_str("use clap::{Arg, ArgAction, Command};\n\n");
    code.push_str("fn main() {\n");
    let name = spec.name.trim();
    code.push_str(&format!("    let matches = Command::new({name:?})\n"));
    // Without it clap takes the usage name from argv[0] at run time.
    code.push_str(&format!("        .bin_name({name:?})\n"));
    if !spec.description.trim().is_empty() {
        code.push_str(&format!("        .about({:?})\n", spec.description));
    }
    code.push_str(&format!("        .term_width({})\n", spec.width()));
    for plan in &plans {
        push_arg(&mut code, plan);
    }
    code.push_str("        .get_matches();\n\n");
    code.push_str("    // Your code here\n");
    if plans.is_empty() {
        code.push_str("    let _ = matches;\n");
    }
    for plan in &plans {
        push_print(&mut code, plan);
    }
    code.push_str("}\n");
    Ok(code)
}

fn push_arg(code: &mut String, plan: &ArgPlan) {
    code.push_str("        .arg(\n");
    code.push_str(&format!("            Arg::new({:?})\n", plan.id()));
    if let Some(short) = plan.names.short {
        code.push_str(&format!("                .short({short:?})\n"));
    }
    if let Some(long) = &plan.names.long {
        code.push_str(&format!("                .long({long:?})\n"));
    }
    if !plan.names.short_aliases.is_empty() {
        code.push_str(&format!(
            "                .visible_short_aliases({:?})\n",
            plan.names.short_aliases
        ));
    }
    if !plan.names.long_aliases.is_empty() {
        code.push_str(&format!(
            "                .visible_aliases({:?})\n",
            plan.names.long_aliases
        ));
    }
    code.push_str(&format!("                .help({:?})\n", plan.help));
    match plan.kind {
        ArgKind::Flag => code.push_str("                .action(ArgAction::SetTrue),\n"),
        ArgKind::Option => {
            code.push_str(&format!("                .value_name({:?})\n", plan.value_name));
            code.push_str("                .action(ArgAction::Set),\n");
        }
    }
    code.push_str("        )\n");
}

fn push_print(code: &mut String, plan: &ArgPlan) {
    let getter = match plan.kind {
        ArgKind::Flag => format!("matches.get_flag({:?})", plan.id()),
        ArgKind::Option => format!("matches.get_one::<String>({:?})", plan.id()),
    };
    code.push_str(&format!(
        "    println!(\"{{}}={{:?}}\", {:?}, {getter});\n",
        plan.label
    ));
}

/// Write the generated program to `dir`, replacing any earlier export.
pub fn export_code(spec: &ProgramSpec, dir: &Path) -> Result<PathBuf> {
    let code = generate_code(spec)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, code.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = code.len(), "exported generated code");
    Ok(path)
}

/// Confirmation text shown after a successful export.
pub fn export_message(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    format!("Code exported to {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ArgumentDescriptor, ArgumentRegistry};

    fn spec_with(args: Vec<ArgumentDescriptor>) -> ProgramSpec {
        let mut spec = ProgramSpec::default();
        spec.args = ArgumentRegistry::from_entries(args);
        spec
    }

    #[test]
    fn default_design_generates_matching_command() {
        let code = generate_code(&ProgramSpec::default()).expect("generate");
        assert!(code.contains("Command::new(\"mycli\")"), "{code}");
        assert!(code.contains(".bin_name(\"mycli\")"), "{code}");
        assert!(code.contains(".about(\"A sample CLI tool\")"), "{code}");
        assert!(code.contains(".term_width(80)"), "{code}");
        assert!(code.contains(".short('v')"), "{code}");
        assert!(code.contains(".long(\"verbose\")"), "{code}");
        assert!(code.contains(".help(\"Enable verbose output\")"), "{code}");
        assert!(code.contains("ArgAction::SetTrue"), "{code}");
        assert!(code.contains("matches.get_flag(\"arg0\")"), "{code}");
        assert!(code.contains("// Your code here"), "{code}");
        assert!(code.contains(CLAP_REQUIREMENT), "{code}");
    }

    #[test]
    fn options_and_aliases_are_generated() {
        let mut spec = spec_with(vec![ArgumentDescriptor::new(
            "output",
            "-o -O --output --out",
            "Write to a file",
            ArgKind::Option,
        )]);
        spec.set_width(100);
        let code = generate_code(&spec).expect("generate");
        assert!(code.contains(".term_width(100)"), "{code}");
        assert!(code.contains(".visible_short_aliases(['O'])"), "{code}");
        assert!(code.contains(".visible_aliases([\"out\"])"), "{code}");
        assert!(code.contains(".value_name(\"OUTPUT\")"), "{code}");
        assert!(code.contains("matches.get_one::<String>(\"arg0\")"), "{code}");
    }

    #[test]
    fn blank_flag_rows_are_not_exported() {
        let spec = spec_with(vec![
            ArgumentDescriptor::new("draft", "", "not yet", ArgKind::Flag),
            ArgumentDescriptor::new("quiet", "-q", "Less output", ArgKind::Flag),
        ]);
        let code = generate_code(&spec).expect("generate");
        assert!(!code.contains("not yet"), "{code}");
        assert!(!code.contains("\"arg0\""), "{code}");
        assert!(code.contains("Arg::new(\"arg1\")"), "{code}");
    }

    #[test]
    fn no_arguments_still_compile_cleanly() {
        let spec = spec_with(vec![ArgumentDescriptor::default()]);
        let code = generate_code(&spec).expect("generate");
        assert!(code.contains("let _ = matches;"), "{code}");
        assert!(!code.contains(".arg("), "{code}");
    }

    #[test]
    fn quotes_are_escaped_in_literals() {
        let mut spec = spec_with(vec![ArgumentDescriptor::new(
            "say",
            "--say",
            r#"Print "hello" \ world"#,
            ArgKind::Flag,
        )]);
        spec.description = "The \"best\" tool".to_string();
        let code = generate_code(&spec).expect("generate");
        assert!(code.contains(r#".about("The \"best\" tool")"#), "{code}");
        assert!(code.contains(r#".help("Print \"hello\" \\ world")"#), "{code}");
    }

    #[test]
    fn invalid_flags_refuse_export() {
        let spec = spec_with(vec![ArgumentDescriptor::new(
            "bad",
            "bad",
            "",
            ArgKind::Flag,
        )]);
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(export_code(&spec, dir.path()).is_err());
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn export_overwrites_fixed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join(EXPORT_FILE_NAME);
        std::fs::write(&target, "stale").expect("seed file");

        let path = export_code(&ProgramSpec::default(), dir.path()).expect("export");
        assert_eq!(path, target);
        let written = std::fs::read_to_string(&path).expect("read export");
        assert!(written.starts_with("//! Generated by help-designer."));
        assert!(!written.contains("stale"));
        assert_eq!(export_message(&path), "Code exported to cli.rs");
    }
}
