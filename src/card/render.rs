use crate::card::symbol::{MAX_CARD, MIN_CARD, card_symbol};

/// Rewrite each numeric literal in an expression string to its card symbol.
///
/// The input is tokenized into maximal digit runs before substitution, so a
/// literal is always mapped as a whole: "11" becomes "J", never two "A"s.
/// Literals outside the card range pass through unchanged.
pub fn symbolize_expression(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut literal = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                literal.push(d);
                chars.next();
            }
            match literal.parse::<u8>() {
                Ok(value) if (MIN_CARD..=MAX_CARD).contains(&value) => {
                    out.push_str(&card_symbol(value));
                }
                _ => out.push_str(&literal),
            }
        } else {
            out.push(c);
            chars.next();
        }
    }

    out
}
