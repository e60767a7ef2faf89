use std::collections::HashMap;

use polars::prelude::DataFrame;

/// Case-insensitive column-name resolution.
///
/// Rules reference columns by name; datasets arrive with whatever header
/// casing the source used. Lookup is case-insensitive but always resolves
/// to the exact name present in the frame.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    map: HashMap<String, String>,
}

impl ColumnLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = name.to_ascii_uppercase();
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    pub fn from_frame(df: &DataFrame) -> Self {
        Self::new(df.get_column_names_owned())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(&name.to_ascii_uppercase())
            .map(|value| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_insensitively_to_original_name() {
        let lookup = ColumnLookup::new(["Precio", "cantidad"]);
        assert_eq!(lookup.get("PRECIO"), Some("Precio"));
        assert_eq!(lookup.get("Cantidad"), Some("cantidad"));
        assert!(lookup.get("total").is_none());
        assert!(lookup.contains("precio"));
    }
}
