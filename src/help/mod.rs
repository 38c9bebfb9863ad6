//! Help menu renderer.
//!
//! Formatting is delegated to clap: the design is translated into a clap
//! `Command` and its `--help` output is returned verbatim. The same argument
//! plan feeds the code exporter so exported programs print the same menu.
mod flags;

use crate::program::ProgramSpec;
use crate::registry::ArgKind;
use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command};
use std::collections::BTreeMap;

pub use flags::{parse_flags, FlagNames};

/// Names clap registers for the built-in help switch.
const RESERVED_SPELLINGS: [&str; 2] = ["-h", "--help"];

/// One argument ready to be registered with clap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgPlan {
    /// Position in the registry.
    pub index: usize,
    pub names: FlagNames,
    pub help: String,
    pub kind: ArgKind,
    /// Placeholder shown for option values.
    pub value_name: String,
    /// Label used when printing parsed values.
    pub label: String,
}

impl ArgPlan {
    pub fn id(&self) -> String {
        format!("arg{}", self.index)
    }
}

/// Translate every descriptor with flag text into an argument plan.
///
/// Descriptors with blank flags are skipped. Any malformed or colliding flag
/// fails the whole plan, naming the offending row.
pub fn plan_args(spec: &ProgramSpec) -> Result<Vec<ArgPlan>> {
    let mut owners: BTreeMap<String, usize> = RESERVED_SPELLINGS
        .iter()
        .map(|spelling| (spelling.to_string(), usize::MAX))
        .collect();
    let mut plans = Vec::new();
    for (index, descriptor) in spec.active_args() {
        let row = index + 1;
        let names =
            parse_flags(&descriptor.flags).map_err(|err| anyhow!("argument {row}: {err}"))?;
        for spelling in names.spellings() {
            if let Some(owner) = owners.insert(spelling.clone(), index) {
                return Err(if owner == usize::MAX {
                    anyhow!("argument {row}: `{spelling}` is reserved for the built-in help")
                } else if owner == index {
                    anyhow!("argument {row}: `{spelling}` is listed twice")
                } else {
                    anyhow!(
                        "argument {row}: `{spelling}` is already used by argument {}",
                        owner + 1
                    )
                });
            }
        }
        let label = match descriptor.name.trim() {
            "" => names.primary().replace('-', "_"),
            name => name.to_string(),
        };
        let value_name = label.to_uppercase();
        plans.push(ArgPlan {
            index,
            names,
            help: descriptor.help.clone(),
            kind: descriptor.kind,
            value_name,
            label,
        });
    }
    Ok(plans)
}

/// Build the clap command equivalent to the design.
pub fn build_command(spec: &ProgramSpec) -> Result<Command> {
    let name = spec.name.trim();
    if name.is_empty() {
        return Err(anyhow!("program name is empty"));
    }
    let mut command = Command::new(name.to_string())
        .bin_name(name.to_string())
        .term_width(usize::from(spec.width()));
    if !spec.description.trim().is_empty() {
        command = command.about(spec.description.clone());
    }
    for plan in plan_args(spec)? {
        command = command.arg(build_arg(&plan));
    }
    Ok(command)
}

fn build_arg(plan: &ArgPlan) -> Arg {
    let mut arg = Arg::new(plan.id()).help(plan.help.clone());
    if let Some(short) = plan.names.short {
        arg = arg.short(short);
    }
    if let Some(long) = &plan.names.long {
        arg = arg.long(long.clone());
    }
    if !plan.names.short_aliases.is_empty() {
        arg = arg.visible_short_aliases(plan.names.short_aliases.clone());
    }
    if !plan.names.long_aliases.is_empty() {
        arg = arg.visible_aliases(plan.names.long_aliases.clone());
    }
    match plan.kind {
        ArgKind::Flag => arg.action(ArgAction::SetTrue),
        ArgKind::Option => arg
            .action(ArgAction::Set)
            .value_name(plan.value_name.clone()),
    }
}

/// Render the `--help` text clap would print for the design.
pub fn render_help(spec: &ProgramSpec) -> Result<String> {
    let mut command = build_command(spec)?;
    let help = command.render_help().to_string();
    tracing::debug!(
        width = spec.width(),
        args = spec.args.len(),
        bytes = help.len(),
        "rendered help preview"
    );
    Ok(help)
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
