//! Declaration structures extracted from a parsed compilation unit.

use serde::Serialize;

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
}

impl TypeKind {
    /// Whether declarations of this kind can be looked up as supertypes.
    pub fn is_catalogued(&self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Interface)
    }
}

/// A method declared directly in a type body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDeclaration {
    /// The method name.
    pub name: String,
    /// Number of formal parameters (varargs count as one).
    pub parameter_count: usize,
    /// Modifier keywords in source order (e.g., "public", "static").
    /// Annotations are not included.
    pub modifiers: Vec<String>,
    /// Line of the first token after modifiers and annotations (1-indexed).
    /// `None` for methods without a source position.
    pub line: Option<usize>,
}

impl MethodDeclaration {
    /// Check whether the method carries the given modifier keyword.
    pub fn has_modifier(&self, keyword: &str) -> bool {
        self.modifiers.iter().any(|m| m == keyword)
    }

    /// Whether the method is part of the public API surface.
    pub fn is_api_visible(&self) -> bool {
        self.has_modifier("public") || self.has_modifier("protected")
    }
}

/// A class, interface, enum or record declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    /// Simple name of the declared type.
    pub name: String,
    pub kind: TypeKind,
    /// Simple name of the `extends` clause, if any (classes only).
    pub superclass: Option<String>,
    /// Simple names of the `implements` clause.
    pub interfaces: Vec<String>,
    /// Methods declared directly in the body, in source order.
    pub methods: Vec<MethodDeclaration>,
    /// Whether the declaration sits at the root of the compilation unit.
    pub top_level: bool,
    /// Line of the declaration (1-indexed).
    pub line: usize,
}

impl ClassDeclaration {
    /// Simple names of all direct supertypes: superclass first, then interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.superclass
            .iter()
            .chain(self.interfaces.iter())
            .map(String::as_str)
    }

    /// Find a method by name and arity.
    pub fn find_method(&self, name: &str, parameter_count: usize) -> Option<&MethodDeclaration> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.parameter_count == parameter_count)
    }
}

/// Everything extracted from one successfully parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompilationUnit {
    /// All type declarations in document order (outer before nested).
    pub types: Vec<ClassDeclaration>,
}

impl CompilationUnit {
    /// Top-level declarations only.
    pub fn top_level_types(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.types.iter().filter(|t| t.top_level)
    }

    /// Class declarations at any depth, in document order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.types.iter().filter(|t| t.kind == TypeKind::Class)
    }
}

/// Reduce a type reference to its simple name.
///
/// `java.util.List<String>` becomes `List`, `Map.Entry` becomes `Entry`.
pub fn simple_type_name(reference: &str) -> String {
    let without_args = reference.split('<').next().unwrap_or(reference);
    without_args
        .rsplit('.')
        .next()
        .unwrap_or(without_args)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, params: usize, modifiers: &[&str]) -> MethodDeclaration {
        MethodDeclaration {
            name: name.to_string(),
            parameter_count: params,
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            line: Some(1),
        }
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("Runnable"), "Runnable");
        assert_eq!(simple_type_name("java.util.List<String>"), "List");
        assert_eq!(simple_type_name("Map.Entry<K, V>"), "Entry");
        assert_eq!(simple_type_name(" Comparable<Foo<Bar>> "), "Comparable");
    }

    #[test]
    fn test_visibility() {
        assert!(method("a", 0, &["public", "static"]).is_api_visible());
        assert!(method("a", 0, &["protected"]).is_api_visible());
        assert!(!method("a", 0, &["private"]).is_api_visible());
        assert!(!method("a", 0, &[]).is_api_visible());
    }

    #[test]
    fn test_supertypes_order() {
        let class = ClassDeclaration {
            name: "Worker".to_string(),
            kind: TypeKind::Class,
            superclass: Some("Base".to_string()),
            interfaces: vec!["Runnable".to_string(), "Closeable".to_string()],
            methods: vec![],
            top_level: true,
            line: 1,
        };
        let supers: Vec<_> = class.supertypes().collect();
        assert_eq!(supers, vec!["Base", "Runnable", "Closeable"]);
    }

    #[test]
    fn test_find_method_matches_arity() {
        let class = ClassDeclaration {
            name: "Shape".to_string(),
            kind: TypeKind::Interface,
            superclass: None,
            interfaces: vec![],
            methods: vec![method("area", 0, &[]), method("scale", 1, &[])],
            top_level: true,
            line: 1,
        };
        assert!(class.find_method("area", 0).is_some());
        assert!(class.find_method("scale", 2).is_none());
        assert!(class.find_method("missing", 0).is_none());
    }
}
