//! Command builders for the CLI.
//!
//! Both commands accept the same flags; the ones a command ignores are
//! hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("skein")
        .about("Plan and render multi-file code generation manifests")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(plan_command())
        .subcommand(render_command())
}

/// Show where every declaration lands and how files import each other.
///
/// Accepts `--write` (hidden) so a render invocation can be switched to a
/// plan by changing only the subcommand.
pub fn plan_command() -> Command {
    Command::new("plan")
        .about("Show the file, name and import plan for a manifest")
        .after_help(
            r#"EXAMPLES:
  skein plan models.json
  skein plan models.json --root out/
  skein plan models.json --format json"#,
        )
        .arg(manifest_arg())
        .arg(root_arg())
        .arg(format_arg())
        .arg(color_arg())
        .arg(write_arg().hide(true))
}

/// Render every planned file.
///
/// Accepts `--format` and `--color` (hidden) for the same reason.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render the planned files")
        .after_help(
            r#"EXAMPLES:
  skein render models.json
  skein render models.json --write
  skein render models.json --root out/ -w"#,
        )
        .arg(manifest_arg())
        .arg(root_arg())
        .arg(write_arg())
        .arg(format_arg().hide(true))
        .arg(color_arg().hide(true))
}
