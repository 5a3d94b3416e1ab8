//! Relative path resolution (RFC 3986 merge and dot-segment removal).

/// Resolve `relative` against `base` the way a browser resolves a relative
/// reference's path: an absolute `relative` replaces the base path, anything
/// else replaces the base's last segment. Dot segments are normalized.
pub fn resolve_path(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    let merged = if relative.starts_with('/') {
        relative.to_string()
    } else {
        match base.rfind('/') {
            Some(idx) => format!("{}{}", &base[..=idx], relative),
            None => relative.to_string(),
        }
    };
    remove_dot_segments(&merged)
}

fn remove_dot_segments(path: &str) -> String {
    let (absolute, body) = match path.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, path),
    };

    let mut out: Vec<&str> = Vec::new();
    let mut ends_in_dir = false;
    for segment in body.split('/') {
        ends_in_dir = false;
        match segment {
            "." => ends_in_dir = true,
            ".." => {
                out.pop();
                ends_in_dir = true;
            }
            s => out.push(s),
        }
    }

    let mut resolved = out.join("/");
    if ends_in_dir && !out.is_empty() {
        resolved.push('/');
    }
    if absolute {
        resolved.insert(0, '/');
    }
    resolved
}
