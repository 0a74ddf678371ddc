use std::path::{Path, PathBuf};

/// What a search query names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    File(PathBuf),
    Url(String),
}

/// Queries starting with `~`, `/` or `.`, or naming an existing path, are
/// local files; anything else is a URL, `http://` unless a scheme is given.
pub fn classify_query(query: &str) -> Query {
    if query.starts_with(['~', '/', '.']) || Path::new(query).exists() {
        return Query::File(expand_home(query));
    }
    if query.contains("://") {
        Query::Url(query.to_string())
    } else {
        Query::Url(format!("http://{query}"))
    }
}

fn expand_home(query: &str) -> PathBuf {
    let rest = match query.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(query),
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => PathBuf::from(query),
    }
}

/// `.html`/`.htm` and their case variants.
pub(crate) fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{classify_query, has_html_extension, Query};

    #[test]
    fn bare_host_gets_http_scheme() {
        assert_eq!(
            classify_query("example.com/page"),
            Query::Url("http://example.com/page".to_string())
        );
    }

    #[test]
    fn explicit_scheme_is_kept() {
        assert_eq!(
            classify_query("https://example.com"),
            Query::Url("https://example.com".to_string())
        );
    }

    #[test]
    fn path_prefixes_mean_files() {
        assert_eq!(
            classify_query("/srv/www/index.html"),
            Query::File("/srv/www/index.html".into())
        );
        assert_eq!(classify_query("./a.html"), Query::File("./a.html".into()));
    }

    #[test]
    fn html_extensions_are_case_insensitive() {
        assert!(has_html_extension(Path::new("a.HTML")));
        assert!(has_html_extension(Path::new("dir/b.htm")));
        assert!(!has_html_extension(Path::new("c.txt")));
        assert!(!has_html_extension(Path::new("html")));
    }
}
