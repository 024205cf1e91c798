use c4gen::docs::{DocGenerator, DEFAULT_MODEL};
use c4gen::error::{Error, Result};
use c4gen::prompt::{Prompter, WrapperKind};
use c4gen::scaffold::run_scaffold;
use c4gen::template::MiniJinjaRenderer;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Canned answers standing in for the interactive prompts.
struct MockPrompter {
    tag_name: String,
    wrapper: WrapperKind,
    ai_docs: bool,
}

impl Prompter for MockPrompter {
    fn input_tag_name(&self) -> Result<String> {
        Ok(self.tag_name.clone())
    }

    fn select_wrapper_kind(&self) -> Result<WrapperKind> {
        Ok(self.wrapper)
    }

    fn confirm_ai_docs(&self) -> Result<bool> {
        Ok(self.ai_docs)
    }
}

const EXISTING_INDEX: &str = "export * from './c4-button';\n";

fn make_package(root: &Path) {
    fs::write(
        root.join("package.json"),
        r#"{ "name": "@c4/components", "version": "1.0.0" }"#,
    )
    .unwrap();
    let src_dir = root.join("src");
    fs::create_dir(&src_dir).unwrap();
    fs::write(src_dir.join("index.ts"), EXISTING_INDEX).unwrap();
}

fn scaffold(root: &Path, prompter: &MockPrompter) -> Result<c4gen::scaffold::ScaffoldOutcome> {
    let engine = MiniJinjaRenderer::new();
    let docs = DocGenerator::new(None, DEFAULT_MODEL);
    run_scaffold(root, &engine, prompter, &docs)
}

#[test]
fn test_scaffold_component_without_wrapper() {
    let package = TempDir::new().unwrap();
    make_package(package.path());
    let prompter = MockPrompter {
        tag_name: "c4-alert".to_string(),
        wrapper: WrapperKind::None,
        ai_docs: false,
    };

    let outcome = scaffold(package.path(), &prompter).unwrap();

    assert_eq!(outcome.class_name, "C4Alert");
    assert_eq!(outcome.component_dir, package.path().join("src").join("c4-alert"));
    assert_eq!(outcome.wrapper, WrapperKind::None);
    assert!(!outcome.ai_docs);

    assert_eq!(fs::read_dir(&outcome.component_dir).unwrap().count(), 2);

    let component = fs::read_to_string(outcome.component_dir.join("c4-alert.ts")).unwrap();
    assert!(component.contains("@customElement('c4-alert')"));
    assert!(component.contains("export class C4Alert extends LitElement"));

    let index = fs::read_to_string(package.path().join("src").join("index.ts")).unwrap();
    assert_eq!(
        index,
        format!("{}export * from './c4-alert';\n", EXISTING_INDEX)
    );
}

#[test]
fn test_scaffold_component_with_react_wrapper() {
    let package = TempDir::new().unwrap();
    make_package(package.path());
    let prompter = MockPrompter {
        tag_name: "c4-notification-banner".to_string(),
        wrapper: WrapperKind::React,
        ai_docs: false,
    };

    let outcome = scaffold(package.path(), &prompter).unwrap();

    assert_eq!(outcome.class_name, "C4NotificationBanner");
    assert_eq!(fs::read_dir(&outcome.component_dir).unwrap().count(), 3);

    let wrapper =
        fs::read_to_string(outcome.component_dir.join("C4NotificationBanner.tsx")).unwrap();
    assert!(wrapper.contains("import type { C4NotificationBanner } from '@c4/components';"));
    assert!(wrapper.contains("React.createElement('c4-notification-banner'"));
}

#[test]
fn test_scaffold_component_with_vue_wrapper() {
    let package = TempDir::new().unwrap();
    make_package(package.path());
    let prompter = MockPrompter {
        tag_name: "c4-toast".to_string(),
        wrapper: WrapperKind::Vue,
        ai_docs: false,
    };

    let outcome = scaffold(package.path(), &prompter).unwrap();

    let wrapper = fs::read_to_string(outcome.component_dir.join("C4Toast.vue")).unwrap();
    assert!(wrapper.contains("import type { C4Toast } from '@c4/components';"));
    assert!(wrapper.contains("<c4-toast v-bind=\"$props\">"));
}

#[test]
fn test_scaffold_with_docs_requested_but_no_credential() {
    let package = TempDir::new().unwrap();
    make_package(package.path());
    let prompter = MockPrompter {
        tag_name: "c4-toast".to_string(),
        wrapper: WrapperKind::None,
        ai_docs: true,
    };

    let outcome = scaffold(package.path(), &prompter).unwrap();

    assert!(!outcome.ai_docs);
    let component = fs::read_to_string(outcome.component_dir.join("c4-toast.ts")).unwrap();
    assert!(!component.contains("/**"));
}

#[test]
fn test_scaffold_aborts_when_component_exists() {
    let package = TempDir::new().unwrap();
    make_package(package.path());
    fs::create_dir(package.path().join("src").join("c4-alert")).unwrap();
    let prompter = MockPrompter {
        tag_name: "c4-alert".to_string(),
        wrapper: WrapperKind::None,
        ai_docs: false,
    };

    let err = scaffold(package.path(), &prompter).unwrap_err();

    assert!(matches!(err, Error::ComponentExistsError { .. }));
    let index = fs::read_to_string(package.path().join("src").join("index.ts")).unwrap();
    assert_eq!(index, EXISTING_INDEX);
}

#[test]
fn test_scaffold_fails_without_manifest() {
    let package = TempDir::new().unwrap();
    fs::create_dir(package.path().join("src")).unwrap();
    let prompter = MockPrompter {
        tag_name: "c4-alert".to_string(),
        wrapper: WrapperKind::None,
        ai_docs: false,
    };

    let err = scaffold(package.path(), &prompter).unwrap_err();
    assert!(matches!(err, Error::ManifestError(_)));
}
