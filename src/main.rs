//! c4gen's main application entry point.
//! Parses command-line arguments, wires the prompt, template and
//! documentation components together and reports the outcome.

use c4gen::{
    cli::{get_args, Args},
    docs::DocGenerator,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::{DialoguerPrompter, WrapperKind},
    scaffold::run_scaffold,
    template::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the template engine, prompter and documentation generator;
///    the service credential is read from `GEMINI_API_KEY` here and nowhere
///    else
/// 2. Runs the scaffolding pipeline
/// 3. Prints the success summary
fn run(args: Args) -> Result<()> {
    println!("Welcome to the C4 component generator.");

    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();
    let docs = DocGenerator::new(std::env::var("GEMINI_API_KEY").ok(), args.model);

    let outcome = run_scaffold(&args.package_dir, &engine, &prompt, &docs)?;

    println!(
        "Created {} in '{}'.",
        outcome.class_name,
        outcome.component_dir.display()
    );
    if outcome.wrapper != WrapperKind::None {
        println!("{} wrapper component was also created.", outcome.wrapper);
    }
    if outcome.ai_docs {
        println!("AI documentation was added to the component.");
    }

    Ok(())
}
