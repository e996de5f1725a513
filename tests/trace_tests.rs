use std::sync::Arc;

use smart_field::trace::logger::TraceLogger;
use smart_field::trace::trace::{RenderEvent, RenderStage};
use smart_field::{
    ComponentMapping, FieldDescriptor, FieldKind, FieldProps, FormStore, Layout, Node, RegisterFn,
    RegisterOptions, Registration, Variant, create_field,
};

fn trace_path(name: &str) -> String {
    let path = std::env::temp_dir().join(format!("smart-field-trace-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_file(&path);
    path.display().to_string()
}

fn read_events(path: &str) -> Vec<RenderEvent> {
    std::fs::read_to_string(path)
        .expect("trace file written")
        .lines()
        .map(|line| serde_json::from_str(line).expect("one JSON event per line"))
        .collect()
}

#[test]
fn default_layout_logs_selected_variant() {
    let path = trace_path("variant.jsonl");
    let store = FormStore::new();
    let component = create_field(ComponentMapping::new(), &store)
        .with_trace(Arc::new(TraceLogger::new(&path)));

    component.render(FieldDescriptor::new("agree", FieldKind::Boolean).into());

    let events = read_events(&path);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field, "agree");
    assert_eq!(events[0].stage, RenderStage::VariantSelected);
    assert_eq!(events[0].variant, Some(format!("{:?}", Variant::Checkbox)));
}

#[test]
fn custom_layout_logs_injections_and_omissions() {
    let path = trace_path("custom.jsonl");
    let store = FormStore::new();
    let component = create_field(ComponentMapping::new(), &store)
        .with_trace(Arc::new(TraceLogger::new(&path)));

    let layout = Layout::render(|h| Node::Fragment(vec![h.label().into(), h.errors().into()]));
    component.render(FieldProps::new(FieldDescriptor::new("bio", FieldKind::String)).layout(layout));

    let stages: Vec<_> = read_events(&path).into_iter().map(|e| e.stage).collect();
    assert_eq!(stages, vec![RenderStage::RoleInjected, RenderStage::ErrorsOmitted]);
}

#[test]
fn missing_registration_is_logged() {
    let path = trace_path("missing.jsonl");
    let register = RegisterFn(|_: &str, _: RegisterOptions| -> Option<Registration> { None });
    let component = create_field(ComponentMapping::new(), register)
        .with_trace(Arc::new(TraceLogger::new(&path)));

    component.render(FieldDescriptor::new("email", FieldKind::String).into());

    let events = read_events(&path);
    assert_eq!(events.len(), 1, "No variant is selected for an unbound field");
    assert_eq!(events[0].stage, RenderStage::RegistrationMissing);
}

#[test]
fn disabled_logger_writes_nothing() {
    let logger = TraceLogger::disabled();
    assert!(!logger.is_enabled());
    logger.log(&RenderEvent::now("x", RenderStage::ErrorsOmitted));
}

#[test]
fn unwritable_path_disables_logging() {
    let logger = TraceLogger::new("/nonexistent-dir/trace.jsonl");
    assert!(!logger.is_enabled());
}
