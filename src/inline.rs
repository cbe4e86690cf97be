use crate::ir::Token;

/// Scans one block's text into inline tokens. Total over arbitrary
/// input: malformed markers degrade to a one-character text token, so
/// the cursor advances on every step and every byte of input lands in
/// exactly one consumed span.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut rest = text;

    loop {
        // Nearest special by explicit index comparison; both markers
        // are ASCII so the offsets are always char boundaries.
        let next = match (rest.find('`'), rest.find('[')) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => {
                if !rest.is_empty() {
                    tokens.push(Token::Text {
                        value: rest.to_string(),
                    });
                }
                return tokens;
            }
        };

        if next > 0 {
            tokens.push(Token::Text {
                value: rest[..next].to_string(),
            });
            rest = &rest[next..];
        }

        let consumed = if rest.starts_with('`') {
            match rest[1..].find('`') {
                Some(close) => {
                    tokens.push(Token::Code {
                        value: rest[1..1 + close].to_string(),
                    });
                    close + 2
                }
                None => fallback(&mut tokens, '`'),
            }
        } else {
            match scan_link(rest) {
                Some((token, len)) => {
                    tokens.push(token);
                    len
                }
                None => fallback(&mut tokens, '['),
            }
        };
        rest = &rest[consumed..];
    }
}

/// Recognizes `[label](href)` with strict adjacency between `]` and `(`.
/// Returns the token and the consumed byte length.
fn scan_link(s: &str) -> Option<(Token, usize)> {
    let close = s.find(']')?;
    let rest = &s[close + 1..];
    if !rest.starts_with('(') {
        return None;
    }
    let paren = rest[1..].find(')')?;
    let token = Token::Link {
        label: s[1..close].to_string(),
        href: rest[1..1 + paren].to_string(),
    };
    Some((token, close + paren + 3))
}

// Malformed marker: emit it as literal text and advance by one.
fn fallback(tokens: &mut Vec<Token>, marker: char) -> usize {
    tokens.push(Token::Text {
        value: marker.to_string(),
    });
    1
}
