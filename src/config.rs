/// Limits applied by an [`crate::Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Maximum number of distinct variables the table will hold.
    pub max_variables: usize,
    /// Longest accepted identifier, in characters.
    pub max_name_length: usize,
}

pub const DEFAULT_MAX_VARIABLES: usize = 128;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 31;

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl EvaluatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    pub fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.max_name_length = max_name_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.max_variables, 128);
        assert_eq!(config.max_name_length, 31);
    }

    #[test]
    fn test_builder() {
        let config = EvaluatorConfig::new()
            .with_max_variables(4)
            .with_max_name_length(8);
        assert_eq!(config.max_variables, 4);
        assert_eq!(config.max_name_length, 8);
    }
}
