/// Lexer position while scanning a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    LineComment,
    BlockComment(usize),
    SingleQuoted { backslash_escapes: bool },
    DoubleQuoted,
    DollarQuoted,
}

/// Split a SQL script into executable statements on `;`.
///
/// Terminators inside string literals, quoted identifiers, comments and
/// dollar-quoted bodies do not end a statement. Comments are stripped from
/// the output, and fragments with no code left are dropped.
pub fn split_statements(script: &str) -> Vec<String> {
    let chars: Vec<char> = script.chars().collect();
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut has_code = false;
    let mut scan = Scan::Code;
    let mut dollar_tag = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        match scan {
            Scan::Code => match ch {
                ';' => flush(&mut statements, &mut current, &mut has_code),
                '-' if next == Some('-') => {
                    scan = Scan::LineComment;
                    i += 1;
                }
                '/' if next == Some('*') => {
                    scan = Scan::BlockComment(1);
                    i += 1;
                }
                '\'' => {
                    scan = Scan::SingleQuoted {
                        backslash_escapes: is_escape_string_prefix(&chars, i),
                    };
                    current.push(ch);
                    has_code = true;
                }
                '"' => {
                    scan = Scan::DoubleQuoted;
                    current.push(ch);
                    has_code = true;
                }
                '$' => {
                    if let Some(tag) = dollar_tag_at(&chars, i) {
                        i += tag.chars().count() - 1;
                        current.push_str(&tag);
                        dollar_tag = tag;
                        scan = Scan::DollarQuoted;
                    } else {
                        current.push(ch);
                    }
                    has_code = true;
                }
                _ => {
                    if !ch.is_whitespace() {
                        has_code = true;
                    }
                    current.push(ch);
                }
            },
            Scan::LineComment => {
                if ch == '\n' {
                    current.push('\n');
                    scan = Scan::Code;
                }
            }
            Scan::BlockComment(depth) => {
                if ch == '*' && next == Some('/') {
                    i += 1;
                    if depth == 1 {
                        current.push(' ');
                        scan = Scan::Code;
                    } else {
                        scan = Scan::BlockComment(depth - 1);
                    }
                } else if ch == '/' && next == Some('*') {
                    i += 1;
                    scan = Scan::BlockComment(depth + 1);
                }
            }
            Scan::SingleQuoted { backslash_escapes } => {
                current.push(ch);
                if backslash_escapes && ch == '\\' {
                    if let Some(escaped) = next {
                        current.push(escaped);
                        i += 1;
                    }
                } else if ch == '\'' {
                    scan = Scan::Code;
                }
            }
            Scan::DoubleQuoted => {
                current.push(ch);
                if ch == '"' {
                    scan = Scan::Code;
                }
            }
            Scan::DollarQuoted => {
                if starts_with_at(&chars, i, &dollar_tag) {
                    i += dollar_tag.chars().count() - 1;
                    current.push_str(&dollar_tag);
                    scan = Scan::Code;
                } else {
                    current.push(ch);
                }
            }
        }

        i += 1;
    }

    flush(&mut statements, &mut current, &mut has_code);
    statements
}

fn flush(statements: &mut Vec<String>, current: &mut String, has_code: &mut bool) {
    if *has_code {
        let statement = current.trim();
        if !statement.is_empty() {
            statements.push(statement.to_string());
        }
    }
    current.clear();
    *has_code = false;
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// `E'...'` literals honour backslash escapes.
fn is_escape_string_prefix(chars: &[char], quote_at: usize) -> bool {
    if quote_at == 0 || !matches!(chars[quote_at - 1], 'E' | 'e') {
        return false;
    }
    quote_at < 2 || !is_identifier_char(chars[quote_at - 2])
}

/// `$$` or `$tag$` starting at `at`. Positional parameters such as `$1` are not tags.
fn dollar_tag_at(chars: &[char], at: usize) -> Option<String> {
    if at > 0 && is_identifier_char(chars[at - 1]) {
        return None;
    }

    let first = *chars.get(at + 1)?;
    if first == '$' {
        return Some("$$".to_string());
    }
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }

    let mut end = at + 1;
    while end < chars.len() && is_identifier_char(chars[end]) {
        end += 1;
    }
    if chars.get(end) == Some(&'$') {
        Some(chars[at..=end].iter().collect())
    } else {
        None
    }
}

fn starts_with_at(chars: &[char], at: usize, needle: &str) -> bool {
    let mut idx = at;
    for expected in needle.chars() {
        if chars.get(idx) != Some(&expected) {
            return false;
        }
        idx += 1;
    }
    true
}
