use crate::error::{EvalError, Result};
use crate::parser::Operator;
use log::trace;

/// A position inside a formula. Only ever moves forward.
///
/// Positions are byte offsets; the scanner only steps over ASCII, so the
/// position always sits on a character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

/// The start of a value, as classified by [`Cursor::operand`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// An opening parenthesis (already consumed).
    Group,
    Number(f64),
    /// An identifier, upper-cased.
    Name(String),
}

fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_token_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed rest of the formula.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    /// Consumes `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    /// Consumes at most one sign prefix. Returns `true` for a minus.
    pub fn sign(&mut self) -> bool {
        if self.eat(b'-') {
            true
        } else {
            self.eat(b'+');
            false
        }
    }

    /// Classifies and consumes the next value token.
    pub fn operand(&mut self, max_name_length: usize) -> Result<Operand> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                Ok(Operand::Group)
            }
            Some(b'0'..=b'9' | b'.') => Ok(Operand::Number(self.number())),
            _ => self.identifier(max_name_length).map(Operand::Name),
        }
    }

    /// Decimal literal with optional fraction and exponent.
    ///
    /// When no digits are present nothing is consumed and the value is zero.
    pub fn number(&mut self) -> f64 {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let mut end = start;
        let mut digits = 0;

        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return 0.0;
        }

        // exponent only counts when at least one digit follows
        if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        let literal = &self.text[start..end];
        self.pos = end;
        let value = literal.parse::<f64>().unwrap_or(0.0);
        trace!("number {literal} -> {value}");
        value
    }

    /// Identifier: a letter or `%`, then letters, digits or underscores.
    ///
    /// The name is returned upper-cased. An over-long name is left unconsumed.
    pub fn identifier(&mut self, max_name_length: usize) -> Result<String> {
        match self.peek() {
            Some(first) if first.is_ascii_alphabetic() || first == b'%' => {}
            _ => return Err(EvalError::InvalidOperand),
        }

        let mut length = 1;
        while self
            .peek_at(length)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            length += 1;
        }
        if length > max_name_length {
            return Err(EvalError::VariableNameTooLong);
        }

        let name = self.text[self.pos..self.pos + length].to_ascii_uppercase();
        self.pos += length;
        trace!("identifier {name}");
        Ok(name)
    }

    /// Reads the operator that follows a value.
    ///
    /// An unknown character is left in place so the position reports it.
    pub fn operator(&mut self) -> Result<Operator> {
        self.skip_whitespace();
        let next = self.peek();
        let op = Operator::from_byte(next).ok_or(EvalError::InvalidOperator)?;
        if next.is_some() {
            self.pos += 1;
        }
        Ok(op)
    }

    /// Splits off the next whitespace-delimited token.
    ///
    /// Leading spaces, tabs and newlines are skipped; the cursor ends up past
    /// the separator and any whitespace after it.
    pub fn take_token(&mut self) -> &'a str {
        while self.peek().is_some_and(is_token_separator) {
            self.pos += 1;
        }
        let start = self.pos;
        while self.peek().is_some_and(|b| !is_token_separator(b)) {
            self.pos += 1;
        }
        let token = &self.text[start..self.pos];
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.skip_whitespace();
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n x");
        cursor.skip_whitespace();
        assert_eq!(cursor.remaining(), "x");
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_single_sign_prefix() {
        let mut cursor = Cursor::new("-+3");
        assert!(cursor.sign());
        assert_eq!(cursor.remaining(), "+3");

        let mut cursor = Cursor::new("+3");
        assert!(!cursor.sign());
        assert_eq!(cursor.remaining(), "3");

        let mut cursor = Cursor::new("3");
        assert!(!cursor.sign());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_numbers() {
        let cases = [
            ("42", 42.0, 2),
            ("3.25*2", 3.25, 4),
            (".5", 0.5, 2),
            ("7.", 7.0, 2),
            ("1e3", 1000.0, 3),
            ("2.5E-1)", 0.25, 6),
            ("1e+2", 100.0, 4),
            ("4e", 4.0, 1),
            ("4e+x", 4.0, 1),
        ];
        for (text, value, consumed) in cases {
            let mut cursor = Cursor::new(text);
            assert_eq!(cursor.number(), value, "{text}");
            assert_eq!(cursor.position(), consumed, "{text}");
        }
    }

    #[test]
    fn test_lone_dot_consumes_nothing() {
        let mut cursor = Cursor::new(".");
        assert_eq!(cursor.number(), 0.0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_identifier_uppercased() {
        let mut cursor = Cursor::new("rate_2 + 1");
        assert_eq!(cursor.identifier(31).unwrap(), "RATE_2");
        assert_eq!(cursor.remaining(), " + 1");

        let mut cursor = Cursor::new("%pi");
        assert_eq!(cursor.identifier(31).unwrap(), "%PI");
    }

    #[test]
    fn test_identifier_errors() {
        let mut cursor = Cursor::new("_x");
        assert_eq!(cursor.identifier(31), Err(EvalError::InvalidOperand));

        let mut cursor = Cursor::new("9");
        assert_eq!(cursor.identifier(31), Err(EvalError::InvalidOperand));

        let mut cursor = Cursor::new("abcdef");
        assert_eq!(cursor.identifier(5), Err(EvalError::VariableNameTooLong));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.identifier(6).unwrap(), "ABCDEF");
    }

    #[test]
    fn test_operand_classification() {
        let mut cursor = Cursor::new("(1)");
        assert_eq!(cursor.operand(31), Ok(Operand::Group));
        assert_eq!(cursor.position(), 1);

        let mut cursor = Cursor::new("12");
        assert_eq!(cursor.operand(31), Ok(Operand::Number(12.0)));

        let mut cursor = Cursor::new("Sin(");
        assert_eq!(cursor.operand(31), Ok(Operand::Name("SIN".to_string())));

        let mut cursor = Cursor::new("*");
        assert_eq!(cursor.operand(31), Err(EvalError::InvalidOperand));
    }

    #[test]
    fn test_operators() {
        let mut cursor = Cursor::new("  + ) =");
        assert_eq!(cursor.operator(), Ok(Operator::Add));
        assert_eq!(cursor.operator(), Ok(Operator::CloseParenthesis));
        assert_eq!(cursor.operator(), Ok(Operator::Assignment));
        assert_eq!(cursor.operator(), Ok(Operator::EndLine));
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_invalid_operator_not_consumed() {
        let mut cursor = Cursor::new(" # 1");
        assert_eq!(cursor.operator(), Err(EvalError::InvalidOperator));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_take_token() {
        let mut cursor = Cursor::new("  1+2\t a=3 \r\n rest");
        assert_eq!(cursor.take_token(), "1+2");
        assert_eq!(cursor.remaining(), "a=3 \r\n rest");
        assert_eq!(cursor.take_token(), "a=3");
        assert_eq!(cursor.remaining(), "rest");
        assert_eq!(cursor.take_token(), "rest");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.take_token(), "");
    }
}
