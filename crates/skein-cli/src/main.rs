mod cli;
mod commands;
mod declaration;
mod error;
mod logging;
mod manifest;

#[cfg(test)]
mod declaration_tests;

use cli::{PlanParams, RenderParams, build_cli};

fn main() {
    logging::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("plan", m)) => {
            let params = PlanParams::from_matches(m);
            commands::plan::run(params.into());
        }
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::render::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
