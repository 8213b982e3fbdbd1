use std::collections::HashMap;

/// Template processor for resolving $VARIABLE format variables
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Parse a string and resolve all $VARIABLE references
    pub fn parse(&self, input: &str) -> String {
        let mut result = input.to_string();

        for (key, value) in &self.variables {
            let pattern = format!("${}", key);
            result = result.replace(&pattern, value);
        }

        result
    }
}

impl Default for Tpl {
    fn default() -> Self {
        Self::new()
    }
}
