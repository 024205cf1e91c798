//! Scaffolding orchestration.
//! Sequences context resolution, input collection, optional documentation
//! enrichment, template rendering and the filesystem commit for one run.

use crate::docs::DocGenerator;
use crate::error::Result;
use crate::manifest::resolve_package_context;
use crate::prompt::{collect_selections, Prompter, WrapperKind};
use crate::tag::to_class_name;
use crate::template::{export_line, render_artifacts, TemplateRenderer};
use crate::writer::commit_component;
use std::path::{Path, PathBuf};

/// Result of a successful scaffolding run, used for the final summary.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Class name of the created component
    pub class_name: String,
    /// Directory the component was created in
    pub component_dir: PathBuf,
    /// Wrapper kind that was generated alongside the component
    pub wrapper: WrapperKind,
    /// Whether a documentation block was added to the component
    pub ai_docs: bool,
}

/// Runs one scaffolding pass over the target package.
///
/// # Flow
/// 1. Resolves the package's importable name; this precedes every prompt
/// 2. Collects the operator's selections
/// 3. Derives the class name from the tag
/// 4. Generates the documentation block, if enrichment was requested
/// 5. Renders the artifact set
/// 6. Commits the artifacts and updates the aggregate index
///
/// # Arguments
/// * `package_dir` - Root of the component library package
/// * `engine` - Template engine used for rendering
/// * `prompt` - Interactive prompt implementation
/// * `docs` - Documentation generator, possibly without a credential
pub fn run_scaffold(
    package_dir: &Path,
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
    docs: &DocGenerator,
) -> Result<ScaffoldOutcome> {
    let context = resolve_package_context(package_dir)?;
    println!("Detected component package name: {}", context.package_name);

    let selections = collect_selections(prompt)?;
    let class_name = to_class_name(&selections.tag_name);

    let doc_block = if selections.ai_docs {
        docs.generate(&class_name, &selections.tag_name)
    } else {
        None
    };

    let files = render_artifacts(
        engine,
        &selections,
        &class_name,
        &context.package_name,
        doc_block.as_deref(),
    )?;

    let src_dir = package_dir.join("src");
    let component_dir = src_dir.join(&selections.tag_name);
    let index_path = src_dir.join("index.ts");

    commit_component(
        &component_dir,
        &files,
        &index_path,
        &export_line(&selections.tag_name),
    )?;

    Ok(ScaffoldOutcome {
        class_name,
        component_dir,
        wrapper: selections.wrapper,
        ai_docs: doc_block.is_some(),
    })
}
