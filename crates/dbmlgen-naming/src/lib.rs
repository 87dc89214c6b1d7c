//! Naming conventions and helpers for dbmlgen.
//!
//! This crate provides the naming rules for synthesized many-to-many join
//! tables and their columns, plus the quoting helpers shared by every DBML
//! block. It has no dependencies and can be used by any other dbmlgen crate.

// ============================================================================
// Relation Naming
// ============================================================================

/// Build the default logical name of a relation between two models.
///
/// The two model names are joined with `To` in lexicographic order, so the
/// result does not depend on which side of the relation is seen first.
///
/// # Examples
/// ```
/// use dbmlgen_naming::default_relation_name;
///
/// assert_eq!(default_relation_name("Post", "Category"), "CategoryToPost");
/// assert_eq!(default_relation_name("Category", "Post"), "CategoryToPost");
/// assert_eq!(default_relation_name("User", "User"), "UserToUser");
/// ```
pub fn default_relation_name(model_a: &str, model_b: &str) -> String {
    if model_a <= model_b {
        format!("{}To{}", model_a, model_b)
    } else {
        format!("{}To{}", model_b, model_a)
    }
}

/// Returns true when `name` was given explicitly, i.e. it is present and
/// differs from the default name for the two models.
///
/// # Examples
/// ```
/// use dbmlgen_naming::is_explicit_relation_name;
///
/// assert!(!is_explicit_relation_name(None, "Post", "Category"));
/// assert!(!is_explicit_relation_name(Some("CategoryToPost"), "Post", "Category"));
/// assert!(is_explicit_relation_name(Some("userReceivesPosts"), "User", "Post"));
/// ```
pub fn is_explicit_relation_name(name: Option<&str>, model_a: &str, model_b: &str) -> bool {
    match name {
        Some(name) => name != default_relation_name(model_a, model_b),
        None => false,
    }
}

/// Effective logical name of a relation: the explicit name when one was
/// assigned, otherwise the default `<A>To<B>` name.
///
/// Synthesized join tables are named after it.
pub fn effective_relation_name(name: Option<&str>, model_a: &str, model_b: &str) -> String {
    match name {
        Some(name) => name.to_string(),
        None => default_relation_name(model_a, model_b),
    }
}

// ============================================================================
// Join Table Naming
// ============================================================================

/// Name of a join table column for the relation field `field_name`.
///
/// Default-named join tables keep the field name as declared. Explicitly
/// named join tables lower-case the whole field name before the `Id`
/// suffix is appended.
///
/// # Examples
/// ```
/// use dbmlgen_naming::join_column_name;
///
/// assert_eq!(join_column_name("categories", false), "categoriesId");
/// assert_eq!(join_column_name("receivedPosts", false), "receivedPostsId");
/// assert_eq!(join_column_name("receivedPosts", true), "receivedpostsId");
/// ```
pub fn join_column_name(field_name: &str, explicit_relation_name: bool) -> String {
    if explicit_relation_name {
        format!("{}Id", field_name.to_lowercase())
    } else {
        format!("{}Id", field_name)
    }
}

// ============================================================================
// Quoting
// ============================================================================

/// Escape a note or string literal for a single-quoted DBML string.
///
/// Only single quotes are touched; every other character is kept as is.
///
/// # Examples
/// ```
/// use dbmlgen_naming::escape_note;
///
/// assert_eq!(escape_note("User's Role"), "User\\'s Role");
/// assert_eq!(escape_note("plain"), "plain");
/// ```
pub fn escape_note(text: &str) -> String {
    text.replace('\'', "\\'")
}

/// Wrap `text` in single quotes, escaping embedded quotes.
pub fn single_quoted(text: &str) -> String {
    format!("'{}'", escape_note(text))
}

/// Render a key list: a single key as is, several keys as `(a, b)`.
///
/// # Examples
/// ```
/// use dbmlgen_naming::combine_keys;
///
/// assert_eq!(combine_keys(&["id".to_string()]), "id");
/// assert_eq!(combine_keys(&["a".to_string(), "b".to_string()]), "(a, b)");
/// ```
pub fn combine_keys(keys: &[String]) -> String {
    if keys.len() == 1 {
        keys[0].clone()
    } else {
        format!("({})", keys.join(", "))
    }
}
