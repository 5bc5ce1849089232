// Hand-written scanner for a single item token: `(index,weight,<marker>cost)`

use crate::domain::{Amount, Item};
use crate::domain::value_objects::saturating_digits;

/// Cursor over the unread part of a token
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn expect(&mut self, c: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(c)?;
        Some(())
    }

    fn eat(&mut self, c: char) -> bool {
        self.expect(c).is_some()
    }

    /// A non-empty run of ASCII digits
    fn digits(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }

        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(digits)
    }

    fn any_char(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(c)
    }

    fn is_done(&self) -> bool {
        self.rest.is_empty()
    }
}

/// Scan one item token.
///
/// The weight needs a decimal point, the cost may be integral. The marker in
/// front of the cost is any single character other than a digit or
/// whitespace. Returns `None` unless the whole token has that shape and the
/// index is a positive `u32`.
pub(crate) fn scan_item(token: &str) -> Option<Item> {
    let mut s = Scanner::new(token);

    s.expect('(')?;
    let index = s.digits()?;
    s.expect(',')?;

    let weight_whole = s.digits()?;
    s.expect('.')?;
    let weight_fraction = s.digits()?;
    s.expect(',')?;

    let marker = s.any_char()?;
    if marker.is_ascii_digit() || marker.is_whitespace() {
        return None;
    }

    let cost_whole = s.digits()?;
    let cost_fraction = if s.eat('.') { s.digits()? } else { "" };
    s.expect(')')?;

    if !s.is_done() {
        return None;
    }

    let index = index.parse::<u32>().ok().filter(|&i| i > 0)?;
    Some(Item::new(
        index,
        Amount::from_digits(weight_whole, weight_fraction)?,
        Amount::from_digits(cost_whole, cost_fraction)?,
    ))
}

/// Scan an integer with an optional sign, saturating on overflow
pub(crate) fn scan_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::try_from(saturating_digits(digits)?).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
