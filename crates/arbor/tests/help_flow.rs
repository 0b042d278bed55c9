//! End-to-end: resolve, run, and document through the help command.

use std::sync::{Arc, Mutex};

use arbor::exec::execute;
use arbor::mark::Renderer;
use arbor::{help_command_with, run, HelpAction, HelpConfig, Invocation, Node, RenderError, RunError};

/// Captures what the help command would display.
#[derive(Default)]
struct Capture {
    seen: Mutex<Vec<String>>,
}

impl Renderer for Capture {
    fn render(&self, document: &str) -> Result<String, RenderError> {
        self.seen.lock().unwrap().push(document.to_string());
        Ok(String::new())
    }
}

struct Failing;

impl Renderer for Failing {
    fn render(&self, _document: &str) -> Result<String, RenderError> {
        Err(RenderError("no terminal".into()))
    }
}

fn app(renderer: Arc<dyn Renderer>) -> Node {
    let config = HelpConfig {
        renderer: Some(renderer),
        ..HelpConfig::default()
    };
    let foo = Node::builder("foo")
        .alias("f")
        .short("foo this command")
        .child(
            Node::builder("subfoo")
                .short("under the foo command")
                .run(arbor::nothing)
                .build()
                .unwrap(),
        )
        .child(help_command_with(config.clone()).unwrap())
        .build()
        .unwrap();
    Node::builder("mycmd")
        .short("my command")
        .child(foo)
        .child(help_command_with(config).unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_bare_help_documents_caller() {
    let capture = Arc::new(Capture::default());
    let root = app(capture.clone());

    run(&root, ["help"]).unwrap();
    run(&root, ["foo", "h"]).unwrap();

    let seen = capture.seen.lock().unwrap();
    assert!(seen[0].starts_with("# Name\n\n`mycmd` — my command\n"), "{}", seen[0]);
    assert!(seen[1].starts_with("# Name\n\n`foo` (`f`) — foo this command\n"), "{}", seen[1]);
}

#[test]
fn test_help_with_args_resolves_from_caller() {
    let capture = Arc::new(Capture::default());
    let root = app(capture.clone());

    run(&root, ["--help", "f", "subfoo"]).unwrap();

    let seen = capture.seen.lock().unwrap();
    assert!(seen[0].starts_with("# Name\n\n`subfoo` — under the foo command\n"), "{}", seen[0]);
}

#[test]
fn test_renderer_failure_propagates_unchanged() {
    let root = app(Arc::new(Failing));
    let err = run(&root, ["help"]).unwrap_err();
    assert!(matches!(err, RunError::Action(_)));
    assert_eq!(err.to_string(), "render error: no terminal");
    assert!(!err.is_developer_error());
}

#[test]
fn test_bad_template_surfaces_as_developer_error() {
    let config = HelpConfig {
        template: Some("{{ aka( }}".into()),
        ..HelpConfig::plain()
    };
    let root = Node::builder("app")
        .child(help_command_with(config).unwrap())
        .build()
        .unwrap();
    let err = run(&root, ["help"]).unwrap_err();
    assert!(err.is_developer_error(), "{err}");
    assert!(err.to_string().starts_with("developer-error:"));
}

#[test]
fn test_execute_with_explicit_stack() {
    let capture = Arc::new(Capture::default());
    let root = app(capture.clone());
    let foo = root.child("foo").unwrap();
    let help = foo.child("help").unwrap();

    execute(help, vec![&root, foo, help], &["subfoo".to_string()]).unwrap();

    let seen = capture.seen.lock().unwrap();
    assert!(seen[0].contains("`subfoo`"), "{}", seen[0]);
}

#[test]
fn test_help_action_output_directly() {
    let root = app(Arc::new(arbor::PlainRenderer));
    let help = root.child("help").unwrap();
    let inv = Invocation::new(help, vec![&root, help]);
    let out = HelpAction::new(HelpConfig::plain()).output(&inv, &[]).unwrap();
    assert!(out.contains("# Commands\n\n    foo      - foo this command\n      subfoo - under the foo command\n"), "{out}");
}
