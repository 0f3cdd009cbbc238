//! Quoted-field scanning.
//!
//! `"` brackets a field: the opening and closing quote are each their own
//! `QUOTE` token, with the content between them returned as a single
//! `STRING`, so the parser can tell a quoted empty string (`""`) from no
//! string at all and can otherwise treat quoted and bare fields the same.
//! A backslash escapes the following byte as a unit, so an escaped quote,
//! space, or backslash never ends the field early.

use std::io::Read;

use crate::resolver::TypeClassResolver;
use crate::token::{Token, TokenKind};

use super::core::{Lexer, MAX_TOK};

impl<R: Read, T: TypeClassResolver> Lexer<R, T> {
    pub(super) fn scan_in_quote(&mut self) -> Token {
        let pos = self.cursor.position();

        if self.cursor.peek() == Some(b'"') {
            self.cursor.bump();
            self.in_quote = false;
            self.at_line_start = false;
            return Token::new(TokenKind::Quote, "\"", pos);
        }

        let mut text = String::new();
        loop {
            match self.cursor.peek() {
                // An EOF before the closing quote just ends the field;
                // the next call returns Eof normally.
                None => {
                    self.in_quote = false;
                    break;
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    text.push(self.cursor.bump().unwrap() as char);
                    if let Some(b) = self.cursor.bump() {
                        text.push(b as char);
                    }
                }
                Some(b) => {
                    text.push(b as char);
                    self.cursor.bump();
                }
            }
            if text.len() > MAX_TOK {
                return Token::error(
                    crate::error::LexError::TokenTooLong.to_string(),
                    pos,
                );
            }
        }

        self.at_line_start = false;
        let comment = self.take_comment();
        Token::new(TokenKind::String, text, pos).with_comment(comment)
    }
}
