//! Template rendering functionality.
//! Pure synthesis of the component, barrel index and wrapper sources from
//! the collected selections; no I/O happens here.

use crate::error::{Error, Result};
use crate::prompt::{UserSelections, WrapperKind};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

/// One generated source file, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the component directory
    pub relative_path: String,
    /// Full file content
    pub content: String,
}

const COMPONENT_TEMPLATE: &str = r#"import { LitElement, html, css } from 'lit';
import { customElement } from 'lit/decorators.js';

{% if docs %}{{ docs }}
{% endif %}@customElement('{{ tag_name }}')
export class {{ class_name }} extends LitElement {
  static styles = css`
    :host {
      display: block;
    }
  `;

  render() {
    return html`
      <div>Hello from {{ class_name }}!</div>
    `;
  }
}
"#;

const INDEX_TEMPLATE: &str = r#"export * from './{{ tag_name }}';
"#;

const REACT_WRAPPER_TEMPLATE: &str = r#"import React, { useRef, useEffect, HTMLAttributes } from 'react';
import type { {{ class_name }} } from '{{ package_name }}';

type Props = HTMLAttributes<HTMLElement> & Partial<Omit<{{ class_name }}, keyof HTMLElement>>;

export const {{ class_name }}Component: React.FC<Props> = ({ children, ...props }) => {
  const ref = useRef<{{ class_name }}>(null);

  useEffect(() => {
    const { current } = ref;
    if (current) {
      Object.entries(props).forEach(([key, value]) => {
        (current as any)[key] = value;
      });
    }
  }, [props]);

  return React.createElement('{{ tag_name }}', { ref }, children);
};
"#;

const VUE_WRAPPER_TEMPLATE: &str = r#"<script setup lang="ts">
import type { {{ class_name }} } from '{{ package_name }}';

defineProps<Partial<Omit<{{ class_name }}, keyof HTMLElement>>>();
</script>

<template>
  <{{ tag_name }} v-bind="$props">
    <slot />
  </{{ tag_name }}>
</template>
"#;

struct WrapperTemplate {
    extension: &'static str,
    source: &'static str,
}

const REACT_WRAPPER: WrapperTemplate =
    WrapperTemplate { extension: "tsx", source: REACT_WRAPPER_TEMPLATE };

const VUE_WRAPPER: WrapperTemplate =
    WrapperTemplate { extension: "vue", source: VUE_WRAPPER_TEMPLATE };

fn wrapper_template(kind: WrapperKind) -> Option<&'static WrapperTemplate> {
    match kind {
        WrapperKind::None => None,
        WrapperKind::React => Some(&REACT_WRAPPER),
        WrapperKind::Vue => Some(&VUE_WRAPPER),
    }
}

/// Renders the full artifact set for one scaffolding run.
///
/// Produces the component source and the barrel index, plus one wrapper
/// file when a wrapper kind was chosen. Relative paths are unique within
/// the set.
///
/// # Arguments
/// * `engine` - Template engine used for rendering
/// * `selections` - Validated operator answers
/// * `class_name` - Class name derived from the tag
/// * `package_name` - Importable name of the library package
/// * `docs` - Documentation block to prefix to the component, if any
pub fn render_artifacts(
    engine: &dyn TemplateRenderer,
    selections: &UserSelections,
    class_name: &str,
    package_name: &str,
    docs: Option<&str>,
) -> Result<Vec<GeneratedFile>> {
    let context = serde_json::json!({
        "tag_name": selections.tag_name,
        "class_name": class_name,
        "package_name": package_name,
        "docs": docs.unwrap_or(""),
    });

    let mut files = vec![
        GeneratedFile {
            relative_path: format!("{}.ts", selections.tag_name),
            content: engine.render(COMPONENT_TEMPLATE, &context)?,
        },
        GeneratedFile {
            relative_path: "index.ts".to_string(),
            content: engine.render(INDEX_TEMPLATE, &context)?,
        },
    ];

    if let Some(wrapper) = wrapper_template(selections.wrapper) {
        files.push(GeneratedFile {
            relative_path: format!("{}.{}", class_name, wrapper.extension),
            content: engine.render(wrapper.source, &context)?,
        });
    }

    Ok(files)
}

/// Line appended to the library's aggregate index for a new component.
pub fn export_line(tag_name: &str) -> String {
    format!("export * from './{}';", tag_name)
}
