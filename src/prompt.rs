//! User input and interaction handling.
//! The three scaffolding questions are asked strictly in order; every answer
//! is validated before it is accepted.

use crate::error::Result;
use crate::tag::validate_tag_name;
use dialoguer::{Confirm, Input, Select};

/// Framework wrapper choice for the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    None,
    React,
    Vue,
}

/// All wrapper kinds, in the order they are offered to the operator.
pub const WRAPPER_KINDS: [WrapperKind; 3] =
    [WrapperKind::None, WrapperKind::React, WrapperKind::Vue];

impl WrapperKind {
    /// Choice label shown by the wrapper selection prompt.
    pub fn label(&self) -> &'static str {
        match self {
            WrapperKind::None => "None (web component only)",
            WrapperKind::React => "React (.tsx)",
            WrapperKind::Vue => "Vue (.vue)",
        }
    }
}

impl std::fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WrapperKind::None => write!(f, "None"),
            WrapperKind::React => write!(f, "React"),
            WrapperKind::Vue => write!(f, "Vue"),
        }
    }
}

/// Validated answers to the scaffolding questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelections {
    /// Tag name of the new component, e.g. `c4-alert`
    pub tag_name: String,
    /// Framework wrapper to generate alongside the component
    pub wrapper: WrapperKind,
    /// Whether to generate an AI documentation block
    pub ai_docs: bool,
}

/// Trait for interactive prompts.
pub trait Prompter {
    /// Asks for the new component's tag name until a valid one is entered.
    fn input_tag_name(&self) -> Result<String>;

    /// Asks which framework wrapper to generate, if any.
    fn select_wrapper_kind(&self) -> Result<WrapperKind>;

    /// Asks whether to generate AI documentation for the component.
    fn confirm_ai_docs(&self) -> Result<bool>;
}

/// Dialoguer-based prompt implementation.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input_tag_name(&self) -> Result<String> {
        let tag_name = Input::<String>::new()
            .with_prompt("Tag name of the new component (e.g. c4-alert)")
            .validate_with(|input: &String| validate_tag_name(input))
            .interact_text()?;
        Ok(tag_name)
    }

    fn select_wrapper_kind(&self) -> Result<WrapperKind> {
        let labels: Vec<&str> = WRAPPER_KINDS.iter().map(|kind| kind.label()).collect();
        let selection = Select::new()
            .with_prompt("Generate a framework-specific wrapper? (optional)")
            .default(0)
            .items(&labels)
            .interact()?;
        Ok(WRAPPER_KINDS[selection])
    }

    fn confirm_ai_docs(&self) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt("Generate AI-powered documentation for this component?")
            .default(true)
            .interact()?;
        Ok(answer)
    }
}

/// Runs the three scaffolding prompts in order.
///
/// Prompts are strictly sequential; no answer is passed downstream before
/// it has been validated and accepted.
pub fn collect_selections(prompt: &dyn Prompter) -> Result<UserSelections> {
    let tag_name = prompt.input_tag_name()?;
    let wrapper = prompt.select_wrapper_kind()?;
    let ai_docs = prompt.confirm_ai_docs()?;

    Ok(UserSelections { tag_name, wrapper, ai_docs })
}
