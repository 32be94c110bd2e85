//! kiln's main application entry point.
//! Handles command-line argument parsing and hands the run to the scaffolder.

use std::path::Path;

use kiln::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Error, Result},
    install::install,
    logger::init_logger,
    prompt::{DialoguerPrompter, PreloadedPrompter, Prompter},
    registry::TemplateRegistry,
    scaffold::Scaffolder,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn prompter(args: &Args) -> Result<Box<dyn Prompter>> {
    Ok(if let Some(name) = &args.application_name {
        Box::new(PreloadedPrompter::with_application_name(name.clone()))
    } else if args.stdin {
        Box::new(PreloadedPrompter::from_stdin()?)
    } else {
        Box::new(DialoguerPrompter::new())
    })
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the generator configuration and both template sets
/// 2. Collects answers and scaffolds the selected template set
/// 3. Installs dependencies unless skipped
fn run(args: Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let templates_root = args.templates_root();
    let base_dir = std::env::current_dir().map_err(Error::IoError)?;

    let config = load_config(&templates_root)?;
    let registry = TemplateRegistry::load(&templates_root)?;
    let prompter = prompter(&args)?;

    let scaffolder = Scaffolder::new(&registry, &config, &templates_root, &base_dir);
    let report = scaffolder.run(&*prompter, args.language())?;

    for action in &report.actions {
        println!("{}: '{}'", action.outcome, relative(&action.target, &base_dir));
    }
    println!(
        "{} project created successfully in {}.",
        report.language,
        relative(&report.destination, &base_dir)
    );

    let installed = install(&report.destination, &config, args.skip_install)?;

    println!("\n cd {}", report.application_name);
    if !installed {
        println!(" {} install", config.package_manager);
    }
    println!(" {} dev", config.run_command);
    Ok(())
}
