use serde::{Deserialize, Serialize};
use super::{coerce_number, number_to_input, EntityForm, EntityId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    pub id: EntityId,
    pub code: String,
    pub discount_percentage: f64,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCodeInput {
    pub code: String,
    pub discount_percentage: Option<f64>,
    pub is_active: bool,
}

/// Quita todo espacio en blanco y pasa a mayúsculas: "sum mer" → "SUMMER"
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscountCodeForm {
    pub code: String,
    pub discount_percentage: String,
    pub is_active: bool,
}

impl DiscountCodeForm {
    /// Se aplica en cada pulsación
    pub fn set_code(&mut self, raw: &str) {
        self.code = normalize_code(raw);
    }
}

impl EntityForm for DiscountCodeForm {
    type Detail = DiscountCode;
    type Input = DiscountCodeInput;

    fn from_detail(discount_code: &DiscountCode) -> Self {
        Self {
            code: discount_code.code.clone(),
            discount_percentage: number_to_input(Some(discount_code.discount_percentage)),
            is_active: discount_code.is_active,
        }
    }

    fn to_input(&self) -> DiscountCodeInput {
        DiscountCodeInput {
            code: normalize_code(&self.code),
            discount_percentage: coerce_number(&self.discount_percentage),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_stripped_and_uppercased() {
        assert_eq!(normalize_code("sum mer"), "SUMMER");
        assert_eq!(normalize_code(" black\tfri day\n"), "BLACKFRIDAY");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn submit_normalizes_even_if_field_was_set_directly() {
        let form = DiscountCodeForm {
            code: "sum mer".into(),
            discount_percentage: "15".into(),
            is_active: true,
        };
        let input = form.to_input();
        assert_eq!(input.code, "SUMMER");
        assert_eq!(input.discount_percentage, Some(15.0));
    }

    #[test]
    fn set_code_normalizes_on_keystroke() {
        let mut form = DiscountCodeForm::default();
        form.set_code("abc d");
        assert_eq!(form.code, "ABCD");
    }
}
