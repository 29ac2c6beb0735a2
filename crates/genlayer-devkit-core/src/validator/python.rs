//! GenLayer intelligent contracts written in Python, parsed with tree-sitter.
//!
//! Extracts top-level classes with their bases and methods, method decorators,
//! docstrings, and a count of every function definition. Code that parses but
//! that CPython would refuse to compile is reported as a syntax issue too.

use tree_sitter::{Node, Parser};

use super::dialect::{ContractDialect, MethodDecl, SourceOutline, SyntaxIssue, TypeDecl};
use super::report::Location;

/// Marker the GenLayer runner expects in the leading comment block.
const DEPENDS_MARKER: &str = "\"Depends\"";

/// GenLayer Python dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenLayerPython;

impl ContractDialect for GenLayerPython {
    fn name(&self) -> &'static str {
        "genlayer-python"
    }

    fn contract_base(&self) -> &'static str {
        "gl.Contract"
    }

    fn constructor_name(&self) -> &'static str {
        "__init__"
    }

    fn outline(&self, source: &str) -> Result<SourceOutline, SyntaxIssue> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| SyntaxIssue {
                message: format!("failed to load Python grammar: {e}"),
                location: None,
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| SyntaxIssue {
            message: "failed to parse source".to_string(),
            location: None,
        })?;

        let root = tree.root_node();
        let bytes = source.as_bytes();
        if root.has_error() {
            return Err(first_error(root, bytes).unwrap_or(SyntaxIssue {
                message: "invalid syntax".to_string(),
                location: None,
            }));
        }
        if let Some(issue) = first_misplaced_statement(root, Scope::default(), bytes) {
            return Err(issue);
        }

        let mut outline = SourceOutline {
            types: Vec::new(),
            function_count: count_functions(root),
        };

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            let class = match child.kind() {
                "class_definition" => Some(child),
                "decorated_definition" => child
                    .child_by_field_name("definition")
                    .filter(|d| d.kind() == "class_definition"),
                _ => None,
            };
            if let Some(class) = class {
                outline.types.push(extract_class(class, bytes));
            }
        }

        tracing::debug!(
            types = outline.types.len(),
            functions = outline.function_count,
            "parsed python outline"
        );
        Ok(outline)
    }

    fn header_issue(&self, source: &str) -> Option<String> {
        let has_header = source
            .lines()
            .map(str::trim)
            .take_while(|l| l.is_empty() || l.starts_with('#'))
            .any(|l| l.contains(DEPENDS_MARKER));
        if has_header {
            None
        } else {
            Some("missing runner header `# { \"Depends\": \"py-genlayer:test\" }`".to_string())
        }
    }
}

fn text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or_default()
}

/// Start of `node` with the column counted in characters, not bytes.
fn location(node: Node<'_>, source: &[u8]) -> Location {
    let start = node.start_position();
    let line_start = node.start_byte() - start.column;
    let column = std::str::from_utf8(&source[line_start..node.start_byte()])
        .map(|prefix| prefix.chars().count())
        .unwrap_or(start.column);
    Location::from_zero_based(start.row, column)
}

/// First ERROR or MISSING node in document order.
fn first_error(node: Node<'_>, source: &[u8]) -> Option<SyntaxIssue> {
    if node.is_missing() {
        return Some(SyntaxIssue {
            message: format!("invalid syntax: expected `{}`", node.kind()),
            location: Some(location(node, source)),
        });
    }
    if node.is_error() {
        let snippet: String = text(node, source)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .chars()
            .take(40)
            .collect();
        let message = if snippet.is_empty() {
            "invalid syntax".to_string()
        } else {
            format!("invalid syntax near `{snippet}`")
        };
        return Some(SyntaxIssue {
            message,
            location: Some(location(node, source)),
        });
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|c| c.has_error() || c.is_missing())
        .find_map(|c| first_error(c, source))
}

/// Enclosing constructs that make `break`, `return` and friends legal.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    function: bool,
    loop_body: bool,
}

/// First statement the grammar accepts but CPython refuses to compile:
/// Python 2 `print`/`exec` statements, and control flow outside its construct.
fn first_misplaced_statement(node: Node<'_>, scope: Scope, source: &[u8]) -> Option<SyntaxIssue> {
    let message = match node.kind() {
        "print_statement" => Some("Missing parentheses in call to 'print'"),
        "exec_statement" => Some("Missing parentheses in call to 'exec'"),
        "break_statement" if !scope.loop_body => Some("'break' outside loop"),
        "continue_statement" if !scope.loop_body => Some("'continue' not properly in loop"),
        "return_statement" if !scope.function => Some("'return' outside function"),
        "yield" if node.is_named() && !scope.function => Some("'yield' outside function"),
        _ => None,
    };
    if let Some(message) = message {
        return Some(SyntaxIssue {
            message: format!("invalid syntax: {message}"),
            location: Some(location(node, source)),
        });
    }

    // Only the `body` field opens a new scope; a loop's `else` clause does not.
    let body = node.child_by_field_name("body").map(|b| b.id());
    let body_scope = match node.kind() {
        "function_definition" | "lambda" => Scope {
            function: true,
            loop_body: false,
        },
        "class_definition" => Scope::default(),
        "for_statement" | "while_statement" => Scope {
            loop_body: true,
            ..scope
        },
        _ => scope,
    };

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(|child| {
        let child_scope = if Some(child.id()) == body {
            body_scope
        } else {
            scope
        };
        first_misplaced_statement(child, child_scope, source)
    })
}

fn count_functions(node: Node<'_>) -> usize {
    let own = usize::from(node.kind() == "function_definition");
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    own + children.into_iter().map(count_functions).sum::<usize>()
}

fn extract_class(class: Node<'_>, source: &[u8]) -> TypeDecl {
    let name = class
        .child_by_field_name("name")
        .map(|n| text(n, source).to_string())
        .unwrap_or_default();

    let mut bases = Vec::new();
    if let Some(superclasses) = class.child_by_field_name("superclasses") {
        let mut cursor = superclasses.walk();
        for base in superclasses.named_children(&mut cursor) {
            if base.kind() == "keyword_argument" || base.kind() == "comment" {
                continue;
            }
            bases.push(text(base, source).split_whitespace().collect::<String>());
        }
    }

    let mut methods = Vec::new();
    if let Some(body) = class.child_by_field_name("body") {
        let mut cursor = body.walk();
        for item in body.named_children(&mut cursor) {
            match item.kind() {
                "function_definition" => methods.push(extract_method(item, Vec::new(), source)),
                "decorated_definition" => {
                    let Some(def) = item
                        .child_by_field_name("definition")
                        .filter(|d| d.kind() == "function_definition")
                    else {
                        continue;
                    };
                    let mut deco_cursor = item.walk();
                    let annotations = item
                        .named_children(&mut deco_cursor)
                        .filter(|c| c.kind() == "decorator")
                        .map(|d| {
                            text(d, source)
                                .trim_start_matches('@')
                                .split_whitespace()
                                .collect::<String>()
                        })
                        .collect();
                    methods.push(extract_method(def, annotations, source));
                }
                _ => {}
            }
        }
    }

    TypeDecl {
        name,
        bases,
        methods,
        location: location(class, source),
    }
}

fn extract_method(def: Node<'_>, annotations: Vec<String>, source: &[u8]) -> MethodDecl {
    let name = def
        .child_by_field_name("name")
        .map(|n| text(n, source).to_string())
        .unwrap_or_default();

    MethodDecl {
        name,
        annotations,
        has_docstring: def.child_by_field_name("body").is_some_and(has_docstring),
        location: location(def, source),
    }
}

fn has_docstring(body: Node<'_>) -> bool {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment");
    let Some(stmt) = first else {
        return false;
    };
    if stmt.kind() != "expression_statement" {
        return false;
    }
    stmt.named_child(0)
        .is_some_and(|e| matches!(e.kind(), "string" | "concatenated_string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = r#"# { "Depends": "py-genlayer:test" }
from genlayer import *


class Counter(gl.Contract):
    def __init__(self):
        self.value = 0

    @gl.public.write
    def increment(self) -> None:
        """Add one."""
        self.value += 1

    @gl.public.view
    def get(self) -> int:
        return self.value

    def _helper(self):
        def inner():
            pass
        return inner


class Plain:
    pass
"#;

    #[test]
    fn test_outline_classes_and_methods() {
        let outline = GenLayerPython.outline(CONTRACT).unwrap();
        assert_eq!(outline.types.len(), 2);

        let counter = &outline.types[0];
        assert_eq!(counter.name, "Counter");
        assert_eq!(counter.bases, vec!["gl.Contract"]);
        assert_eq!(counter.location, Location { line: 5, column: 1 });
        let names: Vec<&str> = counter.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["__init__", "increment", "get", "_helper"]);

        let increment = &counter.methods[1];
        assert_eq!(increment.annotations, vec!["gl.public.write"]);
        assert!(increment.has_docstring);
        assert!(!counter.methods[2].has_docstring);

        assert!(outline.types[1].bases.is_empty());
        // __init__, increment, get, _helper, inner
        assert_eq!(outline.function_count, 5);
    }

    #[test]
    fn test_outline_reports_unclosed_bracket() {
        let src = "class Broken(gl.Contract):\n    def __init__(self):\n        self.data = {\n\n    def get(self):\n        return 1\n";
        let issue = GenLayerPython.outline(src).unwrap_err();
        assert!(issue.message.starts_with("invalid syntax"));
        assert!(issue.location.is_some());
    }

    #[test]
    fn test_decorated_class_is_outlined() {
        let src = "@allow_storage\nclass Box(gl.Contract):\n    def __init__(self):\n        pass\n";
        let outline = GenLayerPython.outline(src).unwrap();
        assert_eq!(outline.types.len(), 1);
        assert_eq!(outline.types[0].name, "Box");
    }

    fn syntax_message(src: &str) -> String {
        GenLayerPython.outline(src).unwrap_err().message
    }

    #[test]
    fn test_python2_print_is_rejected() {
        let src = "class A(gl.Contract):\n    def __init__(self):\n        print \"hello\"\n";
        assert!(syntax_message(src).contains("'print'"));
    }

    #[test]
    fn test_python2_exec_is_rejected() {
        let src = "class A(gl.Contract):\n    def __init__(self):\n        exec \"x = 1\"\n";
        assert!(syntax_message(src).contains("'exec'"));
    }

    #[test]
    fn test_break_outside_loop_is_rejected() {
        let src = "class A(gl.Contract):\n    def __init__(self):\n        break\n";
        assert_eq!(syntax_message(src), "invalid syntax: 'break' outside loop");
    }

    #[test]
    fn test_continue_in_loop_else_is_rejected() {
        let src = "def f(items):\n    for i in items:\n        continue\n    else:\n        continue\n";
        let issue = GenLayerPython.outline(src).unwrap_err();
        assert!(issue.message.contains("'continue'"));
        assert_eq!(issue.location, Some(Location { line: 5, column: 9 }));
    }

    #[test]
    fn test_break_in_nested_function_is_rejected() {
        let src = "def f():\n    while True:\n        def g():\n            break\n        return g\n";
        assert!(syntax_message(src).contains("'break' outside loop"));
    }

    #[test]
    fn test_return_outside_function_is_rejected() {
        let src = "x = 1\nreturn x\n";
        let issue = GenLayerPython.outline(src).unwrap_err();
        assert_eq!(issue.message, "invalid syntax: 'return' outside function");
        assert_eq!(issue.location, Some(Location { line: 2, column: 1 }));
    }

    #[test]
    fn test_yield_outside_function_is_rejected() {
        let src = "class A(gl.Contract):\n    value = yield 1\n";
        assert!(syntax_message(src).contains("'yield' outside function"));
    }

    #[test]
    fn test_control_flow_in_place_is_accepted() {
        let src = "def f(items):\n    for i in items:\n        if i:\n            break\n        continue\n    while True:\n        return (yield i)\n\ng = lambda: (yield)\n";
        assert!(GenLayerPython.outline(src).is_ok());
    }

    #[test]
    fn test_location_column_counts_characters() {
        let issue = GenLayerPython.outline("x = \"é\"; break\n").unwrap_err();
        assert_eq!(issue.location, Some(Location { line: 1, column: 10 }));
    }

    #[test]
    fn test_header_issue() {
        assert!(GenLayerPython.header_issue(CONTRACT).is_none());
        assert!(GenLayerPython
            .header_issue("from genlayer import *\n# { \"Depends\": \"x\" }\n")
            .is_some());
        assert!(GenLayerPython.header_issue("").is_some());
    }
}
