use tracing::trace;
use url::form_urlencoded;

/// A raw entry split into the parts that matter for duplicate detection
///
/// Splitting is permissive: any string decomposes, and components that are
/// not present come back as empty strings. Nothing is case-folded or
/// percent-decoded except query parameter names and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,                          // Text before the first ':' if it looks like a scheme
    pub netloc: String,                          // host[:port] (and userinfo) after "//"
    pub path: String,                            // Up to '?' or '#', minus ';params' on the last segment
    pub query_params: Vec<(String, Vec<String>)>, // Parameter name -> values, in first-seen order
}

impl ParsedUrl {
    /// Splits a raw string into scheme, network location, path and query
    /// parameters. Never fails.
    ///
    /// # Arguments
    /// * `raw` - A hostname, URL or arbitrary string as emitted by a tool
    ///
    /// # Returns
    /// * `ParsedUrl` - The decomposed entry; the fragment is discarded
    pub fn parse(raw: &str) -> Self {
        let (scheme, rest) = split_scheme(raw);

        let (netloc, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                (&after[..end], &after[end..])
            }
            None => ("", rest),
        };

        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let path = strip_path_params(path);

        let query_params = parse_query(query);
        trace!(
            "Split {:?} into scheme={:?} netloc={:?} path={:?} ({} params)",
            raw,
            scheme,
            netloc,
            path,
            query_params.len()
        );

        ParsedUrl {
            scheme: scheme.to_owned(),
            netloc: netloc.to_owned(),
            path: path.to_owned(),
            query_params,
        }
    }

    /// `scheme://netloc/path`, concatenated verbatim
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.netloc, self.path)
    }

    /// Values recorded for a parameter name, in query-string order
    pub fn param_values(&self, name: &str) -> Option<&[String]> {
        self.query_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }
}

// A scheme must start with an ASCII letter and contain only letters,
// digits, '+', '-' or '.'.
fn split_scheme(raw: &str) -> (&str, &str) {
    if let Some((candidate, rest)) = raw.split_once(':') {
        let mut chars = candidate.chars();
        let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if starts_alpha && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            return (candidate, rest);
        }
    }
    ("", raw)
}

// Drops `;params` from the last path segment only: `/a;x/b` is untouched,
// `/p;a=1` becomes `/p`. Without any '/', the first ';' starts the params.
fn strip_path_params(path: &str) -> &str {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(offset) => &path[..segment_start + offset],
        None => path,
    }
}

// Form-urlencoded decoding. Pairs with an empty value (`a=` or a bare `a`)
// are dropped; repeated names accumulate values in order.
fn parse_query(query: &str) -> Vec<(String, Vec<String>)> {
    let mut params: Vec<(String, Vec<String>)> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, values)) => values.push(value.into_owned()),
            None => params.push((key.into_owned(), vec![value.into_owned()])),
        }
    }

    params
}
