//! Demonstration inputs listed by `yoda examples`

/// A sample condition and what it demonstrates
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub input: &'static str,
    pub description: &'static str,
}

pub const EXAMPLES: [Example; 6] = [
    Example {
        input: "value === 42",
        description: "Simple equality",
    },
    Example {
        input: "name == \"Yoda\"",
        description: "String comparison",
    },
    Example {
        input: "count > 0 && status === true",
        description: "Compound condition",
    },
    Example {
        input: "if (age >= 18) {",
        description: "If statement",
    },
    Example {
        input: "type !== null && value === undefined",
        description: "Null checks",
    },
    Example {
        input: "ERROR_CODE === code",
        description: "Already Yoda!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::convert_to_yoda;

    #[test]
    fn test_examples_convert() {
        let converted: Vec<String> = EXAMPLES.iter().map(|e| convert_to_yoda(e.input)).collect();
        assert_eq!(
            converted,
            vec![
                "42 === value",
                "\"Yoda\" == name",
                "0 < count && true === status",
                "if (18 <= age) {",
                "null !== type && undefined === value",
                "ERROR_CODE === code",
            ]
        );
    }
}
