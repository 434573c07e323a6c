use serde::{Deserialize, Serialize};

/// Structured interpretation of a label, returned by
/// [`parse_label`](crate::parse_label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Ingredients in label order.
    pub ingredients: Vec<Ingredient>,
    /// Declared allergens, lowercase, sorted lexicographically.
    pub allergens: Vec<String>,
    /// Additive codes in first-occurrence order, deduplicated.
    pub additives: Vec<Additive>,
    pub flags: Flags,
}

/// A single ingredient as declared on the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Declared proportion from the ingredient's outer `(… %)` annotation.
    pub percent: Option<f64>,
}

/// A food additive reference. The name resolves from the embedded E-number
/// registry; unknown codes keep `name: None` rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Additive {
    /// 3-digit E/INS code.
    pub code: String,
    pub name: Option<String>,
}

/// Quick dietary flags for a downstream scoring stage. Each flag is computed
/// independently from the full label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    pub palm_oil: bool,
    pub added_sugar: bool,
    pub added_salt: bool,
    pub msg_like_enhancer: bool,
    pub artificial_flavour: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let label = Label {
            ingredients: vec![Ingredient {
                name: "Wheat Flour".to_string(),
                percent: None,
            }],
            allergens: vec!["wheat".to_string()],
            additives: vec![Additive {
                code: "500".to_string(),
                name: None,
            }],
            flags: Flags::default(),
        };

        let json = serde_json::to_value(&label).unwrap();
        assert_eq!(json["ingredients"][0]["name"], "Wheat Flour");
        assert_eq!(json["ingredients"][0]["percent"], serde_json::Value::Null);
        assert_eq!(json["additives"][0]["code"], "500");
        assert_eq!(json["additives"][0]["name"], serde_json::Value::Null);
        assert_eq!(json["flags"]["palmOil"], false);
        assert_eq!(json["flags"]["addedSugar"], false);
        assert_eq!(json["flags"]["addedSalt"], false);
        assert_eq!(json["flags"]["msgLikeEnhancer"], false);
        assert_eq!(json["flags"]["artificialFlavour"], false);
    }

    #[test]
    fn test_percent_serializes_as_number() {
        let ingredient = Ingredient {
            name: "Oats".to_string(),
            percent: Some(45.5),
        };
        let json = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(json["percent"], serde_json::json!(45.5));
    }
}
