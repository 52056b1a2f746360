//! Positional substitution for message templates.
//!
//! Templates use printf-style markers: `%s` for a string, `%d` for an
//! integer, `%%` for a literal percent sign. Some string tables carry an
//! annotated form like `%(a jackal)s`; the annotation is a translator hint
//! with no runtime consumer, so it is parsed and discarded and the
//! placeholder behaves positionally like a bare `%s`.

use thiserror::Error;

/// A positional conversion parsed out of a template.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placeholder {
    Str,
    Int,
}

/// A value to substitute into a template.
#[derive(Clone, Copy, Debug)]
pub enum FmtArg<'a> {
    Str(&'a str),
    Int(i64),
}

impl<'a> From<&'a str> for FmtArg<'a> {
    fn from(s: &'a str) -> Self {
        FmtArg::Str(s)
    }
}

impl<'a> From<&'a String> for FmtArg<'a> {
    fn from(s: &'a String) -> Self {
        FmtArg::Str(s)
    }
}

impl From<i64> for FmtArg<'_> {
    fn from(n: i64) -> Self {
        FmtArg::Int(n)
    }
}

impl From<i32> for FmtArg<'_> {
    fn from(n: i32) -> Self {
        FmtArg::Int(i64::from(n))
    }
}

impl From<u32> for FmtArg<'_> {
    fn from(n: u32) -> Self {
        FmtArg::Int(i64::from(n))
    }
}

/// Substitution failures are reported instead of producing garbled text.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    #[error("template expects {expected} arguments but {got} were supplied")]
    ArgumentCount { expected: usize, got: usize },
    #[error("placeholder {index} is %d but the argument is not an integer")]
    NotAnInteger { index: usize },
    #[error("stray `%` at end of template")]
    TrailingPercent,
    #[error("unterminated `%(` annotation")]
    UnterminatedAnnotation,
    #[error("unknown conversion `%{0}`")]
    UnknownConversion(char),
}

#[derive(Debug)]
enum Piece<'a> {
    Literal(&'a str),
    Percent,
    Hole(Placeholder),
}

fn parse(template: &str) -> Result<Vec<Piece>, FormatError> {
    let mut pieces = Vec::new();
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        if pos > 0 {
            pieces.push(Piece::Literal(&rest[..pos]));
        }
        rest = &rest[pos + 1..];
        let mut chars = rest.char_indices();
        let Some((i, c)) = chars.next() else {
            return Err(FormatError::TrailingPercent);
        };
        match c {
            '%' => {
                pieces.push(Piece::Percent);
                rest = &rest[i + c.len_utf8()..];
            }
            's' => {
                pieces.push(Piece::Hole(Placeholder::Str));
                rest = &rest[i + c.len_utf8()..];
            }
            'd' => {
                pieces.push(Piece::Hole(Placeholder::Int));
                rest = &rest[i + c.len_utf8()..];
            }
            '(' => {
                // Annotated placeholder: skip the hint, then read the conversion.
                let Some(close) = rest.find(')') else {
                    return Err(FormatError::UnterminatedAnnotation);
                };
                rest = &rest[close + 1..];
                let mut chars = rest.chars();
                match chars.next() {
                    Some('s') => pieces.push(Piece::Hole(Placeholder::Str)),
                    Some('d') => pieces.push(Piece::Hole(Placeholder::Int)),
                    Some(other) => return Err(FormatError::UnknownConversion(other)),
                    None => return Err(FormatError::TrailingPercent),
                }
                rest = &rest[1..];
            }
            other => return Err(FormatError::UnknownConversion(other)),
        }
    }
    if !rest.is_empty() {
        pieces.push(Piece::Literal(rest));
    }
    Ok(pieces)
}

/// The sequence of placeholders in a template, in order.
///
/// Backs the catalog validator's parity checks between a source string and
/// its translations.
pub fn placeholders(template: &str) -> Result<Vec<Placeholder>, FormatError> {
    Ok(parse(template)?
        .iter()
        .filter_map(|piece| match piece {
            Piece::Hole(placeholder) => Some(*placeholder),
            _ => None,
        })
        .collect())
}

/// Substitute `args` into `template` in order.
///
/// The result contains no remaining placeholder tokens. A count or type
/// mismatch is an error rather than partially substituted output.
pub fn format_args(template: &str, args: &[FmtArg]) -> Result<String, FormatError> {
    let pieces = parse(template)?;
    let expected = pieces.iter().filter(|piece| matches!(piece, Piece::Hole(_))).count();
    if expected != args.len() {
        return Err(FormatError::ArgumentCount { expected, got: args.len() });
    }

    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    for piece in pieces {
        match piece {
            Piece::Literal(s) => out.push_str(s),
            Piece::Percent => out.push('%'),
            Piece::Hole(placeholder) => {
                let arg = args[next];
                match (placeholder, arg) {
                    (Placeholder::Str, FmtArg::Str(s)) => out.push_str(s),
                    (Placeholder::Str | Placeholder::Int, FmtArg::Int(n)) => {
                        out.push_str(&n.to_string());
                    }
                    (Placeholder::Int, FmtArg::Str(_)) => {
                        return Err(FormatError::NotAnInteger { index: next });
                    }
                }
                next += 1;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_substitution() {
        let result = format_args("%s bites you for %d damage!", &["the jackal".into(), 10.into()]);
        assert_eq!(result.unwrap(), "the jackal bites you for 10 damage!");
    }

    #[test]
    fn annotated_placeholder_is_positional() {
        let result = format_args("You kill %(a jackal)s!", &["a jackal".into()]);
        assert_eq!(result.unwrap(), "You kill a jackal!");
        assert_eq!(placeholders("%s is %(blown up)s!").unwrap(), vec![
            Placeholder::Str,
            Placeholder::Str
        ]);
    }

    #[test]
    fn percent_escape() {
        let result = format_args("100%% of %d", &[7.into()]);
        assert_eq!(result.unwrap(), "100% of 7");
        assert!(placeholders("100%%").unwrap().is_empty());
    }

    #[test]
    fn argument_count_mismatch() {
        assert_eq!(
            format_args("%s and %s", &["one".into()]),
            Err(FormatError::ArgumentCount { expected: 2, got: 1 })
        );
        assert_eq!(
            format_args("just text", &["extra".into()]),
            Err(FormatError::ArgumentCount { expected: 0, got: 1 })
        );
    }

    #[test]
    fn type_mismatch() {
        assert_eq!(
            format_args("%d damage", &["lots".into()]),
            Err(FormatError::NotAnInteger { index: 0 })
        );
        // An integer can fill a %s hole.
        assert_eq!(format_args("%s damage", &[3.into()]).unwrap(), "3 damage");
    }

    #[test]
    fn malformed_templates() {
        assert_eq!(placeholders("50%"), Err(FormatError::TrailingPercent));
        assert_eq!(placeholders("%(hint"), Err(FormatError::UnterminatedAnnotation));
        assert_eq!(placeholders("%x"), Err(FormatError::UnknownConversion('x')));
        assert_eq!(placeholders("%(hint)x"), Err(FormatError::UnknownConversion('x')));
    }
}
