// src/ident.rs
//
// Identifier sanitization for the emitted grammar. Token symbols such as
// "3Crv" are not legal enum members, so a leading digit gets an underscore
// prefix. Embedded punctuation is pre-validated by the registries and is
// passed through untouched.

/// Returns a grammar-safe identifier for a raw symbol.
pub fn sanitize(symbol: &str) -> String {
    match symbol.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", symbol),
        _ => symbol.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_digit_gets_prefixed() {
        assert_eq!(sanitize("3Crv"), "_3Crv");
        assert_eq!(sanitize("1INCH"), "_1INCH");
    }

    #[test]
    fn plain_symbols_pass_through() {
        assert_eq!(sanitize("USDC"), "USDC");
        assert_eq!(sanitize("wstETH"), "wstETH");
        assert_eq!(sanitize(""), "");
    }
}
