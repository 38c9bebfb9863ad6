use crate::help::render_help;
use crate::program::ProgramSpec;
use anyhow::Result;

pub(super) fn run_text_preview(spec: &ProgramSpec) -> Result<()> {
    let rendered = spec.active_args().count();
    println!("program: {}", spec.name);
    println!("width: {}", spec.width());
    println!("arguments: {} ({rendered} with flags)", spec.args.len());
    println!();
    let help = render_help(spec)?;
    print!("{help}");
    Ok(())
}
