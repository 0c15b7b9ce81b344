//! Java source parser using tree-sitter.

use std::path::Path;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use crate::analysis::{
    simple_type_name, ClassDeclaration, CompilationUnit, MethodDeclaration, ParseError,
    SourceParser, TypeKind,
};

/// Tree-sitter query for type declarations at any depth.
///
/// Captures:
/// - `class`, `interface`, `enum`, `record`: the declaration node
/// - `*_name`: the declared identifier
const DECLARATION_QUERY: &str = r#"
(class_declaration
  name: (identifier) @class_name
) @class

(interface_declaration
  name: (identifier) @interface_name
) @interface

(enum_declaration
  name: (identifier) @enum_name
) @enum

(record_declaration
  name: (identifier) @record_name
) @record
"#;

pub struct JavaAnalyzer {
    language: Language,
}

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> Result<Parser, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Parser(e.to_string()))?;
        Ok(parser)
    }

    fn query(&self, source: &str) -> Result<Query, ParseError> {
        Query::new(&self.language, source).map_err(|e| ParseError::Parser(e.to_string()))
    }

    fn extract_types(&self, root: Node, source: &[u8]) -> Result<Vec<ClassDeclaration>, ParseError> {
        let query = self.query(DECLARATION_QUERY)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, root, source);

        let mut types = Vec::new();

        while let Some(m) = matches.next() {
            let mut name = String::new();
            let mut kind = TypeKind::Class;
            let mut decl_node = None;

            for capture in m.captures {
                let capture_name = query.capture_names()[capture.index as usize];
                match capture_name {
                    "class_name" | "interface_name" | "enum_name" | "record_name" => {
                        name = capture.node.utf8_text(source).unwrap_or("").to_string();
                    }
                    "class" => {
                        kind = TypeKind::Class;
                        decl_node = Some(capture.node);
                    }
                    "interface" => {
                        kind = TypeKind::Interface;
                        decl_node = Some(capture.node);
                    }
                    "enum" => {
                        kind = TypeKind::Enum;
                        decl_node = Some(capture.node);
                    }
                    "record" => {
                        kind = TypeKind::Record;
                        decl_node = Some(capture.node);
                    }
                    _ => {}
                }
            }

            if name.is_empty() {
                continue;
            }
            if let Some(node) = decl_node {
                types.push((node.start_byte(), self.build_declaration(node, name, kind, source)));
            }
        }

        // Outer declarations start before the types nested inside them.
        types.sort_by_key(|(start, _)| *start);
        Ok(types.into_iter().map(|(_, decl)| decl).collect())
    }

    fn build_declaration(
        &self,
        node: Node,
        name: String,
        kind: TypeKind,
        source: &[u8],
    ) -> ClassDeclaration {
        let superclass = node
            .child_by_field_name("superclass")
            .and_then(|s| type_names(s, source).into_iter().next());

        let interfaces = node
            .child_by_field_name("interfaces")
            .map(|i| type_names(i, source))
            .unwrap_or_default();

        let methods = node
            .child_by_field_name("body")
            .map(|body| self.extract_methods(body, source))
            .unwrap_or_default();

        let top_level = node
            .parent()
            .map(|p| p.kind() == "program")
            .unwrap_or(false);

        ClassDeclaration {
            name,
            kind,
            superclass,
            interfaces,
            methods,
            top_level,
            line: node.start_position().row + 1,
        }
    }

    fn extract_methods(&self, body: Node, source: &[u8]) -> Vec<MethodDeclaration> {
        let mut methods = Vec::new();

        for child in body.named_children(&mut body.walk()) {
            match child.kind() {
                "method_declaration" => methods.extend(self.extract_method(child, source)),
                // Enum bodies keep their members after the constant list.
                "enum_body_declarations" => {
                    for member in child.named_children(&mut child.walk()) {
                        if member.kind() == "method_declaration" {
                            methods.extend(self.extract_method(member, source));
                        }
                    }
                }
                _ => {}
            }
        }

        methods
    }

    fn extract_method(&self, node: Node, source: &[u8]) -> Option<MethodDeclaration> {
        let name = node
            .child_by_field_name("name")?
            .utf8_text(source)
            .ok()?
            .to_string();

        let parameter_count = node
            .child_by_field_name("parameters")
            .map(|params| {
                params
                    .named_children(&mut params.walk())
                    .filter(|p| matches!(p.kind(), "formal_parameter" | "spread_parameter"))
                    .count()
            })
            .unwrap_or(0);

        // Keywords are anonymous nodes; annotations are named and skipped.
        let modifiers = node
            .children(&mut node.walk())
            .find(|c| c.kind() == "modifiers")
            .map(|mods| {
                mods.children(&mut mods.walk())
                    .filter(|m| !m.is_named())
                    .map(|m| m.kind().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Some(MethodDeclaration {
            name,
            parameter_count,
            modifiers,
            line: signature_line(node),
        })
    }
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for JavaAnalyzer {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn parse(&self, _path: &Path, source: &str) -> Result<CompilationUnit, ParseError> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Parser("parser returned no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error(root)
                .map(|n| n.start_position().row + 1)
                .unwrap_or(1);
            return Err(ParseError::Syntax { line });
        }

        let bytes = source.as_bytes();
        Ok(CompilationUnit {
            types: self.extract_types(root, bytes)?,
        })
    }
}

/// Simple names of the types referenced under a `superclass` or
/// `super_interfaces` node.
fn type_names(node: Node, source: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    for child in node.named_children(&mut node.walk()) {
        if child.kind() == "type_list" {
            names.extend(type_names(child, source));
            continue;
        }
        let name = simple_type_name(child.utf8_text(source).unwrap_or(""));
        if !name.is_empty() {
            names.push(name);
        }
    }
    names
}

/// Line of the first token after the modifiers and annotations: the type
/// parameters or the return type.
fn signature_line(method: Node) -> Option<usize> {
    method
        .children(&mut method.walk())
        .find(|c| c.kind() != "modifiers" && !c.is_extra())
        .map(|c| c.start_position().row + 1)
}

/// Locate the first ERROR or MISSING node in document order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    for child in node.children(&mut node.walk()) {
        if child.has_error() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}
