use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::cli::config::AppConfig;
use crate::error::FieldError;
use crate::field::composer::{FieldProps, Layout, create_field};
use crate::field::field_model::FieldDescriptor;
use crate::form::store::FormStore;
use crate::markup::node::Node;
use crate::trace::logger::TraceLogger;

// ============================================================================
// Input loading
// ============================================================================

/// Read a YAML file, or a JSON file when the extension is `.json`.
pub fn load_document<T: DeserializeOwned>(path: &str) -> Result<T, FieldError> {
    let content = std::fs::read_to_string(path).map_err(|source| FieldError::Io {
        path: path.to_string(),
        source,
    })?;

    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|source| FieldError::JsonParse {
            context: path.to_string(),
            source,
        })
    } else {
        serde_yaml::from_str(&content).map_err(|source| FieldError::YamlParse {
            context: path.to_string(),
            source,
        })
    }
}

pub fn load_descriptor(path: &str) -> Result<FieldDescriptor, FieldError> {
    load_document(path)
}

pub fn load_layout(path: &str) -> Result<Node, FieldError> {
    load_document(path)
}

// ============================================================================
// render subcommand
// ============================================================================

/// Render a descriptor against a fresh form store and return the HTML.
pub fn render_descriptor(
    descriptor: FieldDescriptor,
    layout: Option<Node>,
    config: &AppConfig,
    trace: Option<Arc<TraceLogger>>,
) -> String {
    let store = FormStore::new();
    let mut component = create_field(config.components.clone(), &store);
    if let Some(trace) = trace {
        component = component.with_trace(trace);
    }

    let mut props = FieldProps::new(descriptor);
    if let Some(tree) = layout {
        props = props.layout(Layout::Tree(tree));
    }
    component.render(props).to_html()
}

pub fn cmd_render(
    field_path: &str,
    layout_path: Option<&str>,
    output: Option<&str>,
    config: &AppConfig,
    trace_path: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = load_descriptor(field_path)?;
    let layout = layout_path.map(load_layout).transpose()?;

    if verbose > 0 {
        eprintln!(
            "Rendering field '{}' ({:?}, {} layout)...",
            descriptor.name,
            descriptor.kind,
            if layout.is_some() { "custom" } else { "default" }
        );
    }

    let trace = trace_path.map(|p| Arc::new(TraceLogger::new(p)));
    let html = render_descriptor(descriptor, layout, config, trace);

    match output {
        Some(path) => {
            std::fs::write(path, &html).map_err(|source| FieldError::Io {
                path: path.to_string(),
                source,
            })?;
            if verbose > 0 {
                eprintln!("Wrote {}", path);
            }
        }
        None => println!("{}", html),
    }

    Ok(())
}

// ============================================================================
// mapping subcommand
// ============================================================================

pub fn cmd_mapping(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = serde_yaml::to_string(&config.components)?;
    print!("{}", yaml);
    Ok(())
}
