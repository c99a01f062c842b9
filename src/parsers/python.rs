//! Python structural parser using tree-sitter
//!
//! Extracts function, class, and import counts in a single pre-order pass
//! over the concrete syntax tree. A tree containing syntax errors reports
//! [`ParseFailure`] instead of a zero-count result.

use crate::errors::ParseFailure;
use crate::models::StructuralFeatures;
use tree_sitter::{Node, Parser};

/// Closed classification of the node kinds the counter cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeCategory {
    Function,
    Class,
    Import,
    Other,
}

fn classify(kind: &str) -> NodeCategory {
    match kind {
        // Async functions are `function_definition` nodes with an `async`
        // modifier in this grammar, so one arm covers both.
        "function_definition" => NodeCategory::Function,
        "class_definition" => NodeCategory::Class,
        // Each statement counts once regardless of how many names it binds.
        "import_statement" | "import_from_statement" | "future_import_statement" => {
            NodeCategory::Import
        }
        _ => NodeCategory::Other,
    }
}

/// Parse Python source text and extract structural counts.
///
/// Counts definitions at every nesting depth (methods and inner functions
/// included). Line count is the number of newline-delimited lines, counting
/// a trailing unterminated line.
pub fn parse_source(source: &str) -> Result<StructuralFeatures, ParseFailure> {
    let mut parser = Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    parser
        .set_language(&language.into())
        .map_err(|_| ParseFailure)?;

    let tree = parser.parse(source, None).ok_or(ParseFailure)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(ParseFailure);
    }

    let mut features = StructuralFeatures {
        lines: source.lines().count(),
        ..Default::default()
    };
    count_nodes(root, &mut features);
    Ok(features)
}

/// Single pre-order traversal of the whole tree.
fn count_nodes(root: Node, features: &mut StructuralFeatures) {
    let mut cursor = root.walk();

    loop {
        match classify(cursor.node().kind()) {
            NodeCategory::Function => features.functions += 1,
            NodeCategory::Class => features.classes += 1,
            NodeCategory::Import => features.imports += 1,
            NodeCategory::Other => {}
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_correctness() {
        // 2 functions, 1 class, 3 imports, 10 lines.
        let source = "\
import os
import sys
from typing import List

class Greeter:
    def greet(self):
        return \"hi\"

def main():
    pass
";
        let features = parse_source(source).unwrap();
        assert_eq!(
            features,
            StructuralFeatures {
                functions: 2,
                classes: 1,
                imports: 3,
                lines: 10,
            }
        );
    }

    #[test]
    fn test_nested_functions_counted() {
        let source = "\
def outer():
    def inner():
        pass
    return inner
";
        let features = parse_source(source).unwrap();
        assert_eq!(features.functions, 2);
    }

    #[test]
    fn test_async_function_counted() {
        let features = parse_source("async def fetch():\n    pass\n").unwrap();
        assert_eq!(features.functions, 1);
    }

    #[test]
    fn test_import_statement_counts_once() {
        // One statement binding two names is one import.
        let features = parse_source("import os, sys\n").unwrap();
        assert_eq!(features.imports, 1);
    }

    #[test]
    fn test_syntax_error_is_parse_failure() {
        assert_eq!(parse_source("def broken(:\n"), Err(ParseFailure));
    }

    #[test]
    fn test_empty_source_is_zero_counts_not_failure() {
        let features = parse_source("").unwrap();
        assert_eq!(features, StructuralFeatures::default());
    }

    #[test]
    fn test_trailing_line_without_newline_counted() {
        let features = parse_source("x = 1\ny = 2").unwrap();
        assert_eq!(features.lines, 2);
    }

    #[test]
    fn test_determinism() {
        let source = "import os\n\nclass A:\n    def m(self):\n        pass\n";
        assert_eq!(parse_source(source), parse_source(source));
    }
}
