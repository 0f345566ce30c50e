//! Markdown ingestion: pull title, category, and tags out of an uploaded
//! document the same way the admin form does when a file is dropped on it.
//!
//! Lookup order for the title:
//!
//! 1. `title:` in a leading `---` front-matter block
//! 2. the first `# ` heading (which is then removed from the body)
//! 3. the file name, minus `.md`, with dashes turned into spaces

/// Fields recovered from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkdownDocument {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Body with front matter (and a consumed heading) stripped.
    pub body: String,
}

const FENCE: &str = "---";

/// Parse a markdown document, optionally falling back to `file_name` for
/// the title.
pub fn parse_document(text: &str, file_name: Option<&str>) -> MarkdownDocument {
    let mut doc = MarkdownDocument {
        body: text.to_string(),
        ..Default::default()
    };

    if let Some((front, rest)) = split_front_matter(text) {
        for line in front.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "title" if !value.is_empty() => doc.title = Some(unquote(value)),
                "category" if !value.is_empty() => doc.category = Some(unquote(value)),
                "tags" => {
                    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
                        doc.tags = inner
                            .split(',')
                            .map(unquote)
                            .filter(|t| !t.is_empty())
                            .collect();
                    }
                }
                _ => {}
            }
        }
        doc.body = rest.trim().to_string();
    }

    if doc.title.as_deref().map_or(true, str::is_empty) {
        doc.title = None;
        if let Some((heading, body)) = take_first_heading(&doc.body) {
            doc.title = Some(heading);
            doc.body = body;
        } else if let Some(name) = file_name {
            let stem = name.strip_suffix(".md").unwrap_or(name);
            let title = stem.replace('-', " ").trim().to_string();
            if !title.is_empty() {
                doc.title = Some(title);
            }
        }
    }

    doc
}

/// The document title, if front matter or a heading provides one.
pub fn extract_title(text: &str) -> Option<String> {
    parse_document(text, None).title
}

/// `text` without its leading front-matter block, trimmed.
pub fn strip_front_matter(text: &str) -> &str {
    split_front_matter(text).map_or(text, |(_, rest)| rest).trim()
}

/// Split `---\n...\n---` off the front of `text`.
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let after_open = text.strip_prefix(FENCE)?;
    let close = after_open.find(FENCE)?;
    Some((&after_open[..close], &after_open[close + FENCE.len()..]))
}

/// Find the first level-one heading, returning it and the body without it.
fn take_first_heading(body: &str) -> Option<(String, String)> {
    let mut lines: Vec<&str> = body.lines().collect();
    let idx = lines.iter().position(|line| {
        line.strip_prefix('#')
            .is_some_and(|rest| rest.starts_with(char::is_whitespace) && !rest.trim().is_empty())
    })?;
    let heading = lines[idx][1..].trim().to_string();
    lines.remove(idx);
    Some((heading, lines.join("\n").trim().to_string()))
}

fn unquote(value: &str) -> String {
    value.trim().replace(['"', '\''], "").trim().to_string()
}
