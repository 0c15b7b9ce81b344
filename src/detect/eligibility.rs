//! Which methods owe their own Javadoc.
//!
//! Rules are applied in order and the first exclusion wins:
//! 1. the method must be `public` or `protected`
//! 2. trivial getters and setters are exempt
//! 3. methods matching a direct supertype method (same name, same arity)
//!    are exempt, the documentation lives on the supertype
//! 4. methods without a source line cannot be reported

use crate::analysis::{ClassDeclaration, MethodDeclaration};

use super::TypeCatalog;

/// Why a method was left out of the documentation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// Neither `public` nor `protected`.
    NotVisible,
    /// Conventional `getX()` / `setX(v)` accessor.
    TrivialAccessor,
    /// Same name and arity as a method of the named direct supertype.
    Override { supertype: String },
    /// No source line to attribute a finding to.
    MissingPosition,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclusion::NotVisible => "not_visible",
            Exclusion::TrivialAccessor => "trivial_accessor",
            Exclusion::Override { .. } => "override",
            Exclusion::MissingPosition => "missing_position",
        }
    }
}

/// Outcome of the eligibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Analyze the comment above this line.
    Include { line: usize },
    Exclude(Exclusion),
}

/// Decide whether a method is subject to the documentation check.
///
/// Pure function of the method, its enclosing class and the catalog.
pub fn check_eligibility(
    method: &MethodDeclaration,
    class: &ClassDeclaration,
    catalog: &TypeCatalog,
) -> Eligibility {
    if !method.is_api_visible() {
        return Eligibility::Exclude(Exclusion::NotVisible);
    }

    if is_trivial_accessor(method) {
        return Eligibility::Exclude(Exclusion::TrivialAccessor);
    }

    if let Some(supertype) = overridden_in(method, class, catalog) {
        return Eligibility::Exclude(Exclusion::Override {
            supertype: supertype.to_string(),
        });
    }

    match method.line {
        Some(line) => Eligibility::Include { line },
        None => Eligibility::Exclude(Exclusion::MissingPosition),
    }
}

/// Check for a conventional accessor: `getX()` with no parameters or
/// `setX(v)` with exactly one.
pub fn is_trivial_accessor(method: &MethodDeclaration) -> bool {
    let name = method.name.as_str();

    let expected_params = if name.starts_with("get") {
        0
    } else if name.starts_with("set") {
        1
    } else {
        return false;
    };

    let follows_convention = name[3..]
        .chars()
        .next()
        .map(char::is_uppercase)
        .unwrap_or(false);

    follows_convention && method.parameter_count == expected_params
}

/// Find the first direct supertype declaring a method with the same name
/// and arity. Ancestors further up are not consulted.
pub fn overridden_in<'a>(
    method: &MethodDeclaration,
    class: &'a ClassDeclaration,
    catalog: &TypeCatalog,
) -> Option<&'a str> {
    class.supertypes().find(|name| {
        catalog
            .get(name)
            .map(|supertype| {
                supertype
                    .find_method(&method.name, method.parameter_count)
                    .is_some()
            })
            .unwrap_or(false)
    })
}
