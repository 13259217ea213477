//! Structured documentation for a callable, and a parser for doc text.
//!
//! [`Documentation::parse`] understands the three common docstring layouts:
//! - reST fields: `:param name: text`
//! - Google sections: `Args:` followed by indented `name (type): text` entries
//! - NumPy sections: `Parameters` underlined with dashes, `name : type` entries
//!
//! Everything before the first section is the description. Its first line is
//! the short description and the rest is the long description.

use serde::{Deserialize, Serialize};

/// Documentation for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    /// May be empty when the entry exists without text.
    #[serde(default)]
    pub description: String,
}

/// Parsed documentation for a callable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// First line of the description.
    #[serde(default)]
    pub short_description: String,
    /// Description text after the first line.
    #[serde(default)]
    pub long_description: String,
    /// Short and long description joined the way they were written.
    #[serde(default)]
    pub description: String,
    /// Parameter entries in the order they appear.
    #[serde(default)]
    pub params: Vec<ParamDoc>,
}

const REST_PARAM_KEYWORDS: &[&str] = &[
    "param",
    "parameter",
    "arg",
    "argument",
    "key",
    "keyword",
];

const REST_KEYWORDS: &[&str] = &[
    "param",
    "parameter",
    "arg",
    "argument",
    "key",
    "keyword",
    "type",
    "return",
    "returns",
    "rtype",
    "raises",
    "raise",
    "except",
    "exception",
    "yield",
    "yields",
    "ytype",
    "var",
    "ivar",
    "cvar",
    "vartype",
    "meta",
];

const GOOGLE_PARAM_HEADERS: &[&str] = &[
    "Args",
    "Arguments",
    "Parameters",
    "Params",
    "Keyword Args",
    "Keyword Arguments",
    "Other Parameters",
];

const GOOGLE_HEADERS: &[&str] = &[
    "Args",
    "Arguments",
    "Parameters",
    "Params",
    "Keyword Args",
    "Keyword Arguments",
    "Other Parameters",
    "Attributes",
    "Example",
    "Examples",
    "Note",
    "Notes",
    "Raises",
    "Exceptions",
    "Return",
    "Returns",
    "Yield",
    "Yields",
    "Warns",
    "See Also",
    "Todo",
];

const NUMPY_PARAM_HEADERS: &[&str] = &[
    "Parameters",
    "Params",
    "Arguments",
    "Other Parameters",
    "Keyword Arguments",
];

impl Documentation {
    /// Documentation with only a short description.
    pub fn new(short_description: impl Into<String>) -> Self {
        let short_description = short_description.into();
        Self {
            description: short_description.clone(),
            short_description,
            ..Self::default()
        }
    }

    /// Set the long description; `description` becomes short + blank line + long.
    pub fn with_long_description(mut self, long: impl Into<String>) -> Self {
        self.long_description = long.into();
        self.description = join_description(&self.short_description, &self.long_description, true);
        self
    }

    /// Append a parameter entry.
    pub fn with_param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push(ParamDoc {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// First entry documenting `name`.
    pub fn param(&self, name: &str) -> Option<&ParamDoc> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Parse raw doc text. Blank text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let lines = clean_lines(text);
        if lines.is_empty() {
            return None;
        }

        let split = (0..lines.len())
            .find(|&i| is_section_start(&lines, i))
            .unwrap_or(lines.len());
        let (desc_lines, sections) = lines.split_at(split);

        let (short_description, long_description, blank_after_short) =
            split_description(desc_lines);
        let description =
            join_description(&short_description, &long_description, blank_after_short);

        Some(Self {
            short_description,
            long_description,
            description,
            params: parse_params(sections),
        })
    }
}

fn join_description(short: &str, long: &str, blank_after_short: bool) -> String {
    match (short.is_empty(), long.is_empty()) {
        (_, true) => short.to_string(),
        (true, false) => long.to_string(),
        (false, false) => {
            let sep = if blank_after_short { "\n\n" } else { "\n" };
            format!("{short}{sep}{long}")
        }
    }
}

fn split_description(lines: &[String]) -> (String, String, bool) {
    let Some((first, rest)) = lines.split_first() else {
        return (String::new(), String::new(), false);
    };
    let blank_after_short = rest.first().is_some_and(|l| l.trim().is_empty());
    let long = rest.join("\n").trim().to_string();
    (first.trim().to_string(), long, blank_after_short)
}

/// Dedent doc text: the first line is stripped, the rest lose
/// their common indentation, and surrounding blank lines are dropped.
fn clean_lines(text: &str) -> Vec<String> {
    let raw: Vec<&str> = text.lines().collect();
    let indent = raw
        .iter()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_of(l))
        .min()
        .unwrap_or(0);

    let mut lines: Vec<String> = raw
        .iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                l.trim().to_string()
            } else {
                strip_indent(l, indent).trim_end().to_string()
            }
        })
        .collect();

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);
    lines
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn strip_indent(line: &str, indent: usize) -> &str {
    let mut cut = 0;
    for (idx, c) in line.char_indices() {
        if idx >= indent || !c.is_whitespace() {
            break;
        }
        cut = idx + c.len_utf8();
    }
    &line[cut..]
}

/// `:keyword ...:` at column zero, returning the words between the colons
/// and the text after the closing colon.
fn rest_field(line: &str) -> Option<(Vec<&str>, &str)> {
    let body = line.strip_prefix(':')?;
    let close = body.find(':')?;
    let words: Vec<&str> = body[..close].split_whitespace().collect();
    let keyword = *words.first()?;
    REST_KEYWORDS
        .contains(&keyword)
        .then(|| (words, body[close + 1..].trim()))
}

fn google_header(line: &str) -> Option<&str> {
    let title = line.strip_suffix(':')?;
    GOOGLE_HEADERS.contains(&title).then_some(title)
}

fn numpy_header(lines: &[String], i: usize) -> Option<&str> {
    let title = lines.get(i)?.trim();
    let underline = lines.get(i + 1)?.trim();
    let is_underline = underline.len() >= 3 && underline.chars().all(|c| c == '-');
    (!title.is_empty() && indent_of(&lines[i]) == 0 && is_underline).then_some(title)
}

fn is_section_start(lines: &[String], i: usize) -> bool {
    let line = &lines[i];
    rest_field(line).is_some() || google_header(line).is_some() || numpy_header(lines, i).is_some()
}

fn is_continuation(line: &str) -> bool {
    !line.trim().is_empty() && indent_of(line) > 0
}

fn push_param(params: &mut Vec<ParamDoc>, name: &str, description: &[&str]) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    params.push(ParamDoc {
        name: name.to_string(),
        description: description.join("\n").trim().to_string(),
    });
}

fn parse_params(lines: &[String]) -> Vec<ParamDoc> {
    let mut params = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];

        if let Some((words, text)) = rest_field(line) {
            i += 1;
            let is_param = words
                .first()
                .is_some_and(|w| REST_PARAM_KEYWORDS.contains(w));
            let mut desc = vec![text];
            while i < lines.len() && is_continuation(&lines[i]) {
                desc.push(lines[i].trim());
                i += 1;
            }
            // `:param name:` or `:param type name:`
            if is_param
                && words.len() >= 2
                && let Some(name) = words.last()
            {
                push_param(&mut params, name, &desc);
            }
            continue;
        }

        if let Some(title) = google_header(line) {
            i += 1;
            let collect = GOOGLE_PARAM_HEADERS.contains(&title);
            i = parse_google_section(lines, i, collect.then_some(&mut params));
            continue;
        }

        if let Some(title) = numpy_header(lines, i) {
            let collect = NUMPY_PARAM_HEADERS.contains(&title);
            i += 2;
            i = parse_numpy_section(lines, i, collect.then_some(&mut params));
            continue;
        }

        i += 1;
    }

    params
}

/// Indented entries under a Google header. Returns the index after the section.
fn parse_google_section(
    lines: &[String],
    mut i: usize,
    mut params: Option<&mut Vec<ParamDoc>>,
) -> usize {
    let mut base = None;
    let mut current: Option<(String, Vec<&str>)> = None;

    while i < lines.len() {
        let line = &lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }
        let indent = indent_of(line);
        if indent == 0 {
            break;
        }
        let base_indent = *base.get_or_insert(indent);
        if indent <= base_indent {
            if let (Some(out), Some((name, desc))) = (params.as_deref_mut(), current.take()) {
                push_param(out, &name, &desc);
            }
            let entry = line.trim();
            let (head, text) = entry.split_once(':').unwrap_or((entry, ""));
            let name = head.split_once('(').map_or(head, |(n, _)| n);
            current = Some((name.to_string(), vec![text.trim()]));
        } else if let Some((_, desc)) = current.as_mut() {
            desc.push(line.trim());
        }
        i += 1;
    }

    if let (Some(out), Some((name, desc))) = (params, current) {
        push_param(out, &name, &desc);
    }
    i
}

/// `name : type` entries with indented descriptions. Returns the index after the section.
fn parse_numpy_section(
    lines: &[String],
    mut i: usize,
    mut params: Option<&mut Vec<ParamDoc>>,
) -> usize {
    let mut current: Option<(String, Vec<&str>)> = None;

    while i < lines.len() {
        let line = &lines[i];
        if numpy_header(lines, i).is_some()
            || rest_field(line).is_some()
            || google_header(line).is_some()
        {
            break;
        }
        if line.trim().is_empty() {
            i += 1;
            continue;
        }
        if indent_of(line) == 0 {
            if let (Some(out), Some((name, desc))) = (params.as_deref_mut(), current.take()) {
                push_param(out, &name, &desc);
            }
            let name = line.split_once(':').map_or(line.as_str(), |(n, _)| n);
            current = Some((name.to_string(), Vec::new()));
        } else if let Some((_, desc)) = current.as_mut() {
            desc.push(line.trim());
        }
        i += 1;
    }

    if let (Some(out), Some((name, desc))) = (params, current) {
        push_param(out, &name, &desc);
    }
    i
}
