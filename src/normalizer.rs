//! Turns free-text ingredient input into a canonical set of tokens.

/// Normalized ingredient tokens parsed from user input.
///
/// Tokens are trimmed, lower-cased, non-empty and unique. Order follows the
/// first occurrence in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientQuery {
    tokens: Vec<String>,
}

impl IngredientQuery {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render the tokens back as comma-separated input text.
    pub fn to_input_string(&self) -> String {
        self.tokens.join(", ")
    }
}

/// Split `raw` on commas, trim and lower-case every piece, and drop empty or
/// repeated pieces.
pub fn normalize(raw: &str) -> IngredientQuery {
    let mut tokens: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let token = piece.trim().to_lowercase();
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    IngredientQuery { tokens }
}

/// How close the current input is to being searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStrength {
    /// Enough ingredients to search
    Ready,
    /// One ingredient short
    Almost,
    Insufficient,
}

impl InputStrength {
    pub fn of(query: &IngredientQuery, threshold: usize) -> Self {
        let count = query.len();
        if count >= threshold {
            InputStrength::Ready
        } else if count + 1 == threshold {
            InputStrength::Almost
        } else {
            InputStrength::Insufficient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_trims_and_lowercases() {
        let query = normalize("  Tomato , ONION,garlic  ");
        assert_eq!(query.tokens(), ["tomato", "onion", "garlic"]);
    }

    #[test]
    fn test_drops_empty_pieces() {
        let query = normalize(",, tomato,  , onion,");
        assert_eq!(query.tokens(), ["tomato", "onion"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize(" , ,").is_empty());
    }

    #[test]
    fn test_duplicates_are_removed() {
        let query = normalize("tomato, Tomato, onion, TOMATO ");
        assert_eq!(query.tokens(), ["tomato", "onion"]);
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let query = normalize("Turmeric Powder, red  chilli");
        assert_eq!(query.tokens(), ["turmeric powder", "red  chilli"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "tomato, onion, garlic",
            " A,b ,, C , a",
            "",
            "Green Peas,  paneer,garam masala ",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once.to_input_string());
            assert_eq!(once, twice, "input: {:?}", input);
        }
    }

    #[test]
    fn test_input_strength() {
        assert_eq!(InputStrength::of(&normalize(""), 3), InputStrength::Insufficient);
        assert_eq!(InputStrength::of(&normalize("a"), 3), InputStrength::Insufficient);
        assert_eq!(InputStrength::of(&normalize("a, b"), 3), InputStrength::Almost);
        assert_eq!(InputStrength::of(&normalize("a, b, c"), 3), InputStrength::Ready);
        assert_eq!(InputStrength::of(&normalize("a, b, c, d"), 3), InputStrength::Ready);
        assert_eq!(InputStrength::of(&normalize("a, a"), 3), InputStrength::Insufficient);
    }
}
