use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use dircraft::{materialize::GenerateOptions, tree::ParseOptions};

fn strict_dirs_arg() -> Arg {
    Arg::new("strict-dirs")
        .long("strict-dirs")
        .help("Only treat names with a trailing '/' as directories")
        .action(ArgAction::SetTrue)
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Creates the described directories and files on disk")
                .arg(
                    Arg::new("input")
                        .help("yaml file, tree-text file, or inline structure string")
                        .required(true),
                )
                .arg(
                    Arg::new("destination")
                        .help("The directory the structure is created under")
                        .required(true),
                )
                .arg(
                    Arg::new("yes")
                        .help("Skip the confirmation prompt")
                        .short('y')
                        .long("yes")
                        .action(ArgAction::SetTrue),
                )
                .arg(strict_dirs_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Parses the input and prints the tree without writing anything")
                .arg(
                    Arg::new("input")
                        .help("yaml file, tree-text file, or inline structure string")
                        .required(true),
                )
                .arg(strict_dirs_arg()),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("generate", args)) => handle_generate(args),
        Some(("preview", args)) => handle_preview(args),
        _ => unreachable!(),
    }
}

fn init_logging(is_verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if is_verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

fn handle_generate(args: &ArgMatches) -> miette::Result<()> {
    let input = args.get_one::<String>("input").expect("input required");
    let destination = args
        .get_one::<String>("destination")
        .expect("destination required");

    let parse_options = ParseOptions {
        require_slash_for_directories: args.get_flag("strict-dirs"),
    };
    let generate_options = GenerateOptions {
        assume_yes: args.get_flag("yes"),
    };

    dircraft::api::generate(input, destination, parse_options, generate_options)?;

    Ok(())
}

fn handle_preview(args: &ArgMatches) -> miette::Result<()> {
    let input = args.get_one::<String>("input").expect("input required");

    let parse_options = ParseOptions {
        require_slash_for_directories: args.get_flag("strict-dirs"),
    };

    dircraft::api::preview(input, parse_options)?;

    Ok(())
}
