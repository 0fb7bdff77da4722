use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Import declarations only: dynamic `import(...)` and `require` are not matched.
// A declaration starts a line or follows a `;`.
static IMPORT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?:^|;)[ \t]*(import)(?:\s+|\s*[{*])(?:[^'";()]*?\s*from\s*)?['"]([^'"\r\n]*)['"]"#,
    )
    .unwrap()
});

/// One `import` statement found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    pub specifier: String,
    /// 1-based line of the `import` keyword.
    pub line: usize,
    /// 0-based column of the `import` keyword.
    pub column: usize,
}

pub fn parse_imports(content: &str) -> Vec<ImportEdge> {
    let code = blank_comments(content);
    let mut edges = Vec::new();

    for caps in IMPORT_DECLARATION.captures_iter(&code) {
        let (keyword, specifier) = match (caps.get(1), caps.get(2)) {
            (Some(k), Some(s)) => (k, s),
            _ => continue,
        };

        let before = &code[..keyword.start()];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(nl) => keyword.start() - nl - 1,
            None => keyword.start(),
        };

        edges.push(ImportEdge {
            specifier: specifier.as_str().to_string(),
            line,
            column,
        });
    }

    edges
}

/// Replace `//` and `/* */` comments with spaces, keeping newlines and byte
/// offsets so locations still point into the original text.
fn blank_comments(content: &str) -> String {
    let bytes = content.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if let Some(q) = quote {
            out.push(b);
            if b == b'\\' && i + 1 < bytes.len() {
                out.push(bytes[i + 1]);
                i += 2;
                continue;
            }
            if b == q || (b == b'\n' && q != b'`') {
                quote = None;
            }
            i += 1;
            continue;
        }

        match (b, bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                let end = content[i + 2..]
                    .find("*/")
                    .map(|p| i + 2 + p + 2)
                    .unwrap_or(bytes.len());
                let blanked = bytes[i..end]
                    .iter()
                    .map(|&c| if c == b'\n' { b'\n' } else { b' ' });
                out.extend(blanked);
                i = end;
            }
            (b'/', Some(b'/')) => {
                let end = content[i..].find('\n').map(|p| i + p).unwrap_or(bytes.len());
                out.resize(out.len() + (end - i), b' ');
                i = end;
            }
            (b'\'' | b'"' | b'`', _) => {
                quote = Some(b);
                out.push(b);
                i += 1;
            }
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Read a file and extract its imports; unreadable files yield none.
pub fn read_imports(path: &Path) -> Vec<ImportEdge> {
    match fs::read_to_string(path) {
        Ok(content) => parse_imports(&content),
        Err(_) => Vec::new(),
    }
}
