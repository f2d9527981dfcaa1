//! Path patterns like `/todos/:id`.

use std::collections::HashMap;

pub type Params = HashMap<String, String>;

/// Match `path` against `pattern`, binding `:name` segments.
pub fn match_path(pattern: &str, path: &str) -> Option<Params> {
    let mut pattern_parts = segments(pattern);
    let mut path_parts = segments(path);
    let mut params = Params::new();

    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.insert(name.to_string(), actual.to_string());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Remove the `/<namespace>` prefix, yielding the route-relative path
pub fn strip_namespace<'a>(namespace: &str, path: &'a str) -> Option<&'a str> {
    let namespace = namespace.trim_matches('/');
    if namespace.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix('/')?.strip_prefix(namespace)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
