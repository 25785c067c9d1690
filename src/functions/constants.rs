use std::f64::consts::{E, PI};

/// Reserved constant names. These are never stored in the variable table.
pub const CONSTANTS: [(&str, f64); 2] = [("%E", E), ("%PI", PI)];

/// Resolves an upper-cased identifier to a named constant.
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_constant() {
        assert_eq!(lookup_constant("%E"), Some(E));
        assert_eq!(lookup_constant("%PI"), Some(PI));
        assert_eq!(lookup_constant("PI"), None);
        assert_eq!(lookup_constant("%pi"), None);
    }
}
