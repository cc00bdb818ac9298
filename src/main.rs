use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use std::path::{Path, PathBuf};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("spec")
                .help("Path to the project structure document (YAML or TOML)")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    handle_build(&matches)
}

fn init_logger(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("executing in verbose mode");
}

fn handle_build(args: &ArgMatches) -> miette::Result<()> {
    let spec = args.get_one::<PathBuf>("spec").expect("spec required");

    log::debug!("building project from {}", spec.display());

    scaffy::build_project(spec, Path::new("."))?;

    Ok(())
}
