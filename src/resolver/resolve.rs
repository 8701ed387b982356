use std::path::Path;

use minijinja::Environment;

use crate::error::StubError;
use crate::page::compile::compile_module;
use crate::page::model::{ClassOrigin, PageClass, PageClassSpec};

// ============================================================================
// Three-tier page-class resolution
// ============================================================================

/// Resolve a page class, trying module file -> template -> synthesized
/// subclass, in that order. First match wins.
///
/// 1. `<page_directory>/<module_name>.yaml` exists: compile it as an
///    isolated namespace and return the class named `class_name`. Any
///    error on this path (unreadable file, bad YAML, missing class)
///    propagates unchanged; there is no fallback past an existing file.
/// 2. `<template_directory>/<template_name>` exists: render it with an
///    empty context, compile the rendered text, return the class named
///    `class_name`. Same no-fallback rule for render/compile errors.
/// 3. Neither exists: synthesize an empty subclass of `spec.parent`
///    named `class_name`.
///
/// Hand-written code outranks generated code outranks generation from
/// scratch; a valid class is always returned unless the user's own
/// module or template is broken, in which case the error surfaces.
///
/// Trust boundary: the contents of both directories are trusted
/// completely. Nothing is cached; every call re-reads the disk.
pub fn resolve(
    page_directory: &Path,
    template_directory: &Path,
    spec: &PageClassSpec,
) -> Result<PageClass, StubError> {
    let module_path = page_directory.join(format!("{}.yaml", spec.module_name));
    if module_path.is_file() {
        return class_from_module(&module_path, spec);
    }

    let template_path = template_directory.join(&spec.template_name);
    if template_path.is_file() {
        return class_from_template(template_directory, spec);
    }

    Ok(PageClass::synthesize(&spec.class_name, &spec.parent))
}

/// Tier 1: load the class from a page-module file local to the project.
fn class_from_module(module_path: &Path, spec: &PageClassSpec) -> Result<PageClass, StubError> {
    let source = std::fs::read_to_string(module_path).map_err(|e| StubError::ModuleRead {
        path: module_path.to_path_buf(),
        source: e,
    })?;

    let origin = module_path.display().to_string();
    let module = compile_module(&source, &origin, ClassOrigin::Module)?;

    module
        .class(&spec.class_name)
        .cloned()
        .ok_or_else(|| StubError::ClassMissing {
            class: spec.class_name.clone(),
            origin,
        })
}

/// Tier 2: render the template with no variables and compile the result.
fn class_from_template(
    template_directory: &Path,
    spec: &PageClassSpec,
) -> Result<PageClass, StubError> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(template_directory));

    let rendered = env
        .get_template(&spec.template_name)
        .and_then(|t| t.render(()))
        .map_err(|e| StubError::TemplateRender {
            name: spec.template_name.clone(),
            source: e,
        })?;

    let origin = format!("template {}", spec.template_name);
    let module = compile_module(&rendered, &origin, ClassOrigin::Template)?;

    module
        .class(&spec.class_name)
        .cloned()
        .ok_or_else(|| StubError::ClassMissing {
            class: spec.class_name.clone(),
            origin,
        })
}
