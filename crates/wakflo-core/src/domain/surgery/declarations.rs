//! Idempotent merge of `//go:embed` declarations into a `doc.go` file.

use std::collections::HashSet;

use crate::domain::naming::to_camel_case;

/// Identifier declared for a documentation file.
///
/// `run_python.md` → `runPythonDocs`.
pub fn declaration_identifier(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let stem: String = stem.chars().filter(|c| *c != ' ').collect();
    // Same expression as `{{ file_name | camel }}Docs` in the source templates.
    format!("{}Docs", to_camel_case(&stem))
}

/// Add a declaration for every discovered file not yet declared in `existing`.
///
/// Presence is a plain substring check on the identifier. Returns `None` when
/// nothing is missing, so the caller can skip the write entirely. When
/// `existing` lacks the `package <package>` clause, the package header and
/// the `embed` import are prepended.
pub fn merge_declarations<'a, I>(existing: &str, discovered: I, package: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut new_block = String::new();

    for file_name in discovered {
        let ident = declaration_identifier(file_name);
        if existing.contains(&ident) || !seen.insert(ident.clone()) {
            continue;
        }
        new_block.push_str(&format!("//go:embed {file_name}\nvar {ident} string\n\n"));
    }

    if new_block.is_empty() {
        return None;
    }

    let mut content = String::new();
    if !existing.contains(&format!("package {package}")) {
        content.push_str(&format!("package {package}\n\nimport _ \"embed\"\n\n"));
    }
    content.push_str(existing);
    content.push_str(&new_block);
    Some(content)
}
