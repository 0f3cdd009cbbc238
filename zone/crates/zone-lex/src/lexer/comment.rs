//! Comment scanning.
//!
//! A `;` starts a comment that runs to the end of the physical line. Its
//! text is buffered rather than discarded: it is attached to whichever
//! token is returned next, so a comment on its own line (or several, across
//! a parenthesized continuation) rides along on the following `NEWLINE` or
//! field token instead of vanishing.

use std::io::Read;

use crate::error::LexError;
use crate::lexer::core::MAX_TOK;
use crate::resolver::TypeClassResolver;
use crate::token::Token;

use super::core::Lexer;

impl<R: Read, T: TypeClassResolver> Lexer<R, T> {
    pub(super) fn skip_comment(&mut self) -> Option<Token> {
        let pos = self.position();
        self.cursor.bump(); // the ';'
        let mut text = String::new();
        while !matches!(self.cursor.peek(), None | Some(b'\n')) {
            text.push(self.cursor.bump().unwrap() as char);
            if text.len() > MAX_TOK {
                return Some(Token::error(LexError::CommentTooLong.to_string(), pos));
            }
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            if self.comment_buf.is_empty() {
                self.comment_buf.push(';');
            } else {
                self.comment_buf.push(' ');
            }
            self.comment_buf.push_str(trimmed);
        }
        None
    }
}
