//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but are populated from clap, which
//! keeps the command handlers free of `clap` types.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::plan::{PlanArgs, ReportFormat};
use crate::commands::render::RenderArgs;

pub struct PlanParams {
    pub manifest: PathBuf,
    pub root: Option<PathBuf>,
    pub format: ReportFormat,
    pub color: ColorChoice,
}

impl PlanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            root: m.get_one::<PathBuf>("root").cloned(),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<PlanParams> for PlanArgs {
    fn from(p: PlanParams) -> Self {
        Self {
            manifest: p.manifest,
            root: p.root,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RenderParams {
    pub manifest: PathBuf,
    pub root: Option<PathBuf>,
    pub write: bool,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: manifest_path(m),
            root: m.get_one::<PathBuf>("root").cloned(),
            write: m.get_flag("write"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            manifest: p.manifest,
            root: p.root,
            write: p.write,
        }
    }
}

fn manifest_path(m: &ArgMatches) -> PathBuf {
    // Required positional; clap rejects the invocation before we get here.
    m.get_one::<PathBuf>("manifest").cloned().unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> ReportFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => ReportFormat::Json,
        _ => ReportFormat::Text,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
