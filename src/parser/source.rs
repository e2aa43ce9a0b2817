//! Textual helpers that work on raw header source before any grammar is applied.

use std::ops::Range;

#[derive(Clone, Copy)]
enum Scan {
    Code,
    LineComment,
    BlockComment,
    Quoted(char),
}

/// Removes `// …` and `/* … */` comments in a single pass.
///
/// Each comment becomes one space. Newlines inside block comments are kept, and
/// comment markers inside string or character literals are left alone.
pub fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut state = Scan::Code;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match state {
            Scan::Code => match (c, next) {
                ('/', Some('/')) => {
                    chars.next();
                    out.push(' ');
                    state = Scan::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    out.push(' ');
                    state = Scan::BlockComment;
                }
                ('"' | '\'', _) => {
                    out.push(c);
                    state = Scan::Quoted(c);
                }
                _ => out.push(c),
            },
            Scan::LineComment => {
                if c == '\n' {
                    out.push(c);
                    state = Scan::Code;
                }
            }
            Scan::BlockComment => match (c, next) {
                ('*', Some('/')) => {
                    chars.next();
                    state = Scan::Code;
                }
                ('\n', _) => out.push(c),
                _ => {}
            },
            Scan::Quoted(quote) => {
                out.push(c);
                if c == '\\' {
                    // Escaped character, including an escaped quote.
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == quote || c == '\n' {
                    state = Scan::Code;
                }
            }
        }
    }
    out
}

/// Cuts constructor initializer lists, so `Servo() : pin_(0) {}` reads as `Servo() {}`.
///
/// A list starts at a single `:` that follows a closing `)` at the top level of
/// `body` and runs up to the `{` or `;` that ends it.
pub fn strip_initializer_lists(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut braces = 0usize;
    let mut parens = 0usize;
    let mut after_params = false;
    let mut in_list = false;
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if in_list {
            match c {
                '(' => parens += 1,
                ')' => parens = parens.saturating_sub(1),
                '{' | ';' if parens == 0 => {
                    in_list = false;
                    if c == '{' {
                        braces += 1;
                    }
                    out.push(c);
                }
                _ => {}
            }
            continue;
        }

        match c {
            '{' => braces += 1,
            '}' => braces = braces.saturating_sub(1),
            '(' if braces == 0 => parens += 1,
            ')' if braces == 0 => {
                parens = parens.saturating_sub(1);
                if parens == 0 {
                    after_params = true;
                    out.push(c);
                    continue;
                }
            }
            ':' if braces == 0 && parens == 0 && after_params && chars.peek() != Some(&':') => {
                after_params = false;
                in_list = true;
                continue;
            }
            _ => {}
        }
        if !c.is_whitespace() {
            after_params = false;
        }
        out.push(c);
    }
    out
}

/// Finds the `}` matching the `{` at byte offset `open`.
///
/// Braces inside string and character literals are ignored. Returns `None`
/// when the block is never closed.
pub fn matching_brace(content: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, c) in content[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Replaces every brace block with `;`, so `int read() { return x; }` reads as `int read() ;`.
pub fn collapse_blocks(body: &str) -> String {
    let mut collapsed = String::with_capacity(body.len());
    let mut depth = 0usize;

    for c in body.chars() {
        match c {
            '{' => {
                if depth == 0 {
                    collapsed.push(';');
                }
                depth += 1;
            }
            '}' => depth = depth.saturating_sub(1),
            _ if depth == 0 => collapsed.push(c),
            _ => {}
        }
    }
    collapsed
}

/// Blanks out the given byte ranges, keeping newlines so line anchors still line up.
pub fn mask_ranges(content: &str, ranges: &[Range<usize>]) -> String {
    content
        .char_indices()
        .map(|(i, c)| {
            if c != '\n' && ranges.iter().any(|r| r.contains(&i)) {
                ' '
            } else {
                c
            }
        })
        .collect()
}
