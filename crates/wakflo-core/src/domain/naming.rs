//! Identifier naming helpers and the transform table handed to renderers.
//!
//! Every transform is a pure `fn(&str) -> String`. [`Transforms`] enumerates
//! them by the name templates use after a `|`, so a renderer never reaches for
//! global state to find a filter.

// ============================================================================
// Transform table
// ============================================================================

/// A named, pure string transform.
pub type Transform = fn(&str) -> String;

/// The set of transforms available to a template, by name.
///
/// | Name      | Example input   | Output         |
/// |-----------|-----------------|----------------|
/// | `lower`   | "Run Python"    | "run python"   |
/// | `upper`   | "Run Python"    | "RUN PYTHON"   |
/// | `snake`   | "Run Python"    | "run_python"   |
/// | `kebab`   | "Run Python"    | "run-python"   |
/// | `camel`   | "run_python"    | "runPython"    |
/// | `pascal`  | "run_python"    | "RunPython"    |
/// | `package` | "Google Sheets" | "googlesheets" |
#[derive(Debug, Clone, Copy)]
pub struct Transforms {
    pub lower: Transform,
    pub upper: Transform,
    pub snake: Transform,
    pub kebab: Transform,
    pub camel: Transform,
    pub pascal: Transform,
    pub package: Transform,
}

impl Transforms {
    /// Look a transform up by the name used in templates.
    pub fn get(&self, name: &str) -> Option<Transform> {
        match name {
            "lower" => Some(self.lower),
            "upper" => Some(self.upper),
            "snake" => Some(self.snake),
            "kebab" => Some(self.kebab),
            "camel" => Some(self.camel),
            "pascal" => Some(self.pascal),
            "package" => Some(self.package),
            _ => None,
        }
    }

    pub const NAMES: [&'static str; 7] =
        ["lower", "upper", "snake", "kebab", "camel", "pascal", "package"];
}

impl Default for Transforms {
    fn default() -> Self {
        Self {
            lower: to_lower,
            upper: to_upper,
            snake: to_snake_case,
            kebab: to_kebab_case,
            camel: to_camel_case,
            pascal: to_pascal_case,
            package: to_package_name,
        }
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Convert a string to snake_case.
///
/// | Input | Output |
/// |-------|--------|
/// | "MyApp" | "my_app" |
/// | "my-app" | "my_app" |
/// | "HTTPRequest" | "http_request" |
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Same as `to_snake_case` but joins with `-`.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to PascalCase.
///
/// | Input | Output |
/// |-------|--------|
/// | "my-app" | "MyApp" |
/// | "HTTPRequest" | "HttpRequest" |
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase: PascalCase with the first word lowered.
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    match words.next() {
        Some(first) => {
            let mut out = first;
            for w in words {
                out.push_str(&capitalize(&w));
            }
            out
        }
        None => String::new(),
    }
}

/// Go package name: lowercase ASCII letters and digits only.
pub fn to_package_name(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// File-safe name: lowercase with spaces turned into underscores.
///
/// This is intentionally not `to_snake_case`: "RunPython" stays "runpython",
/// matching the file names existing projects already contain.
pub fn to_file_name(s: &str) -> String {
    s.trim().replace(' ', "_").to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split a string into lowercase words based on casing and separators.
///
/// 1. **Explicit separators:** `_`, `-`, `.`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // "myApp" → "my" + "App", "oauth2Docs" → "oauth2" + "Docs"
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
