use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git_tag_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use git_tag_bump::config::BumpConfig;
use git_tag_bump::domain::VersionPart;
use git_tag_bump::git::GitCli;
use git_tag_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-tag-bump",
    version,
    about = "Bump the latest semantic version tag and optionally push it"
)]
struct Args {
    #[arg(value_enum, default_value_t = VersionPart::Minor, help = "Version part to increment")]
    part: VersionPart,

    #[arg(long, help = "Push tag to remote repository")]
    push: bool,

    #[arg(long, help = "Print the next tag without creating or pushing it")]
    dry_run: bool,

    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        help = "Tag prefix to try, in order (repeatable) [default: v, then none]"
    )]
    prefixes: Vec<String>,

    #[arg(short, long, help = "Annotated tag message [default: Version]")]
    message: Option<String>,

    #[arg(short = 'C', long, value_name = "PATH", help = "Run as if started in PATH")]
    repo: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.verbose);

    let config = BumpConfig::with_overrides(args.prefixes, args.message);
    let runner = match &args.repo {
        Some(path) => GitCli::in_dir(path),
        None => GitCli::new(),
    };

    let workflow_args = BumpWorkflowArgs {
        part: args.part,
        push: args.push,
        dry_run: args.dry_run,
    };

    let mut stdout = std::io::stdout();
    match run_bump_workflow(workflow_args, &config, &runner, &mut stdout) {
        Ok(outcome) => {
            if args.verbose > 0 {
                ui::display_outcome(&outcome);
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
