use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;
use std::sync::Arc;

use crate::catalog::CatalogEntry;
use crate::report::{ErrorKey, Reports};
use crate::token::{Loc, Token};

fn is_keyword_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

#[derive(Debug)]
struct PoParser<'a, 'r> {
    loc: Loc,
    content: &'a str,
    chars: Peekable<Chars<'a>>,
    reports: &'r mut Reports,
}

impl<'a, 'r> PoParser<'a, 'r> {
    fn new(mut loc: Loc, content: &'a str, reports: &'r mut Reports) -> Self {
        let mut chars = content.chars().peekable();
        if chars.peek() == Some(&'\u{feff}') {
            loc.offset += '\u{feff}'.len_utf8();
            chars.next();
        }
        PoParser { loc, content, chars, reports }
    }

    fn next_char(&mut self) {
        // self.loc is always the loc of the peekable char
        if let Some(c) = self.chars.next() {
            self.loc.offset += c.len_utf8();
            if c == '\n' {
                self.loc.line += 1;
                self.loc.column = 1;
            } else {
                self.loc.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.next_char();
        }
        self.next_char(); // Eat the newline
    }

    /// Error recovery: resume at the blank line that separates entries.
    fn skip_to_blank_line(&mut self) {
        self.skip_line();
        loop {
            match self.chars.peek() {
                None => return,
                Some('\n') => {
                    self.next_char();
                    return;
                }
                Some(_) => self.skip_line(),
            }
        }
    }

    fn at_keyword(&mut self) -> bool {
        matches!(self.chars.peek(), Some(&c) if is_keyword_char(c))
    }

    fn get_keyword(&mut self) -> Token {
        let loc = self.loc.clone();
        while let Some(c) = self.chars.peek() {
            if is_keyword_char(*c) {
                self.next_char();
            } else {
                break;
            }
        }
        let s = self.content[loc.offset..self.loc.offset].to_string();
        Token::new(s, loc)
    }

    fn unexpected_char(&mut self, expected: &str) {
        let msg = format!(
            "unexpected character `{}`, {expected}",
            self.chars.peek().unwrap_or(&' ')
        );
        let loc = self.loc.clone();
        self.reports.error(loc, ErrorKey::ParseError, &msg);
    }

    /// One double-quoted string, unescaped. None means the line was broken
    /// and has been reported.
    fn parse_quoted(&mut self) -> Option<String> {
        self.next_char(); // eat the opening quote
        let mut s = String::new();
        loop {
            match self.chars.peek() {
                None | Some('\n') => {
                    let loc = self.loc.clone();
                    self.reports.error(loc, ErrorKey::ParseError, "string without ending quote");
                    return None;
                }
                Some('"') => {
                    self.next_char();
                    return Some(s);
                }
                Some('\\') => {
                    self.next_char();
                    match self.chars.peek() {
                        Some('n') => s.push('\n'),
                        Some('t') => s.push('\t'),
                        Some('r') => s.push('\r'),
                        Some('"') => s.push('"'),
                        Some('\\') => s.push('\\'),
                        Some(&c) => {
                            let loc = self.loc.clone();
                            self.reports.warn(loc, ErrorKey::Encoding, &format!("unknown escape `\\{c}`"));
                            s.push(c);
                        }
                        None => continue, // reported on the next loop round
                    }
                    self.next_char();
                }
                Some(&c) => {
                    s.push(c);
                    self.next_char();
                }
            }
        }
    }

    /// One or more quoted strings, possibly spread over several lines,
    /// concatenated the way gettext does it.
    fn parse_string_block(&mut self) -> Option<Token> {
        while let Some(c) = self.chars.peek() {
            if c.is_whitespace() && *c != '\n' {
                self.next_char();
            } else {
                break;
            }
        }
        if self.chars.peek() != Some(&'"') {
            self.unexpected_char("expected `\"`");
            return None;
        }
        let loc = self.loc.clone();
        let mut s = self.parse_quoted()?;
        loop {
            self.skip_whitespace();
            if self.chars.peek() == Some(&'"') {
                s.push_str(&self.parse_quoted()?);
            } else {
                break;
            }
        }
        Some(Token::new(s, loc))
    }

    /// Return the next entry, or None if there are no more in the file.
    fn parse_entry(&mut self) -> Option<CatalogEntry> {
        loop {
            // Skip comments and blank lines until something starts an entry.
            self.skip_whitespace();
            match self.chars.peek() {
                None => return None,
                Some('#') => {
                    self.skip_line();
                    continue;
                }
                Some(&c) if is_keyword_char(c) => (),
                Some(_) => {
                    self.unexpected_char("expected `msgid`");
                    self.skip_line();
                    continue;
                }
            }

            let mut keyword = self.get_keyword();
            let mut ctxt = None;
            if keyword.is("msgctxt") {
                let Some(token) = self.parse_string_block() else {
                    self.skip_to_blank_line();
                    continue;
                };
                ctxt = Some(token);
                self.skip_whitespace();
                if !self.at_keyword() {
                    self.unexpected_char("expected `msgid` after `msgctxt`");
                    self.skip_to_blank_line();
                    continue;
                }
                keyword = self.get_keyword();
            }

            if !keyword.is("msgid") {
                let msg = format!("unexpected keyword `{keyword}`");
                self.reports.error(&keyword, ErrorKey::ParseError, &msg);
                self.skip_to_blank_line();
                continue;
            }
            let Some(msgid) = self.parse_string_block() else {
                self.skip_to_blank_line();
                continue;
            };

            self.skip_whitespace();
            if !self.at_keyword() {
                self.reports.error(&msgid, ErrorKey::ParseError, "msgid without msgstr");
                self.skip_to_blank_line();
                continue;
            }
            let keyword = self.get_keyword();
            if keyword.is("msgid_plural") {
                self.reports.warn(&keyword, ErrorKey::ParseError, "plural entries are not supported");
                self.skip_to_blank_line();
                continue;
            }
            if !keyword.is("msgstr") {
                let msg = format!("expected `msgstr`, found `{keyword}`");
                self.reports.error(&keyword, ErrorKey::ParseError, &msg);
                self.skip_to_blank_line();
                continue;
            }
            if self.chars.peek() == Some(&'[') {
                self.reports.error(
                    &keyword,
                    ErrorKey::ParseError,
                    "plural `msgstr` without `msgid_plural`",
                );
                self.skip_to_blank_line();
                continue;
            }
            let Some(msgstr) = self.parse_string_block() else {
                self.skip_to_blank_line();
                continue;
            };

            return Some(CatalogEntry { ctxt, msgid, msgstr });
        }
    }
}

pub(crate) struct PoReader<'a, 'r> {
    parser: PoParser<'a, 'r>,
}

impl std::fmt::Debug for PoReader<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.debug_struct("PoReader").finish_non_exhaustive()
    }
}

impl Iterator for PoReader<'_, '_> {
    type Item = CatalogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.parse_entry()
    }
}

pub(crate) fn parse_po<'a, 'r>(
    pathname: &Path,
    content: &'a str,
    reports: &'r mut Reports,
) -> PoReader<'a, 'r> {
    let mut loc = Loc::for_file(Arc::new(pathname.to_path_buf()));
    loc.line = 1;
    loc.column = 1;
    PoReader { parser: PoParser::new(loc, content, reports) }
}
