use serde::{Deserialize, Serialize};
use super::{coerce_number, number_to_input, EntityForm, EntityId};

/// Fila de la tabla de productos
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: EntityId,
    pub name: String,
    pub regular_price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    pub is_available: bool,
    pub is_public: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: EntityId,
    pub image_file_name: String,
}

/// Proyección de detalle de un producto
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    pub regular_price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    pub is_available: bool,
    pub is_public: bool,
    #[serde(default)]
    pub image_file_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(rename = "GalleryImages", default)]
    pub gallery_images: Vec<GalleryImage>,
}

/// Respuesta de add/delete gallery image: solo nos interesa la galería devuelta
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryUpdate {
    #[serde(rename = "GalleryImages")]
    pub gallery_images: Vec<GalleryImage>,
}

/// Payload de creación/edición
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub regular_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub short_description: String,
    pub long_description: String,
    pub is_available: bool,
    pub is_public: bool,
}

/// Estado editable del formulario (todo texto, tal como se escribe)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub regular_price: String,
    pub sale_price: String,
    pub short_description: String,
    pub long_description: String,
    pub is_available: bool,
    pub is_public: bool,
}

impl EntityForm for ProductForm {
    type Detail = ProductDetail;
    type Input = ProductInput;

    fn from_detail(product: &ProductDetail) -> Self {
        Self {
            name: product.name.clone(),
            regular_price: number_to_input(Some(product.regular_price)),
            sale_price: number_to_input(product.sale_price),
            short_description: product.short_description.clone().unwrap_or_default(),
            long_description: product.long_description.clone().unwrap_or_default(),
            is_available: product.is_available,
            is_public: product.is_public,
        }
    }

    /// Solo coerción de tipos; la validación es del servidor
    fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            regular_price: coerce_number(&self.regular_price),
            sale_price: coerce_number(&self.sale_price),
            short_description: self.short_description.clone(),
            long_description: self.long_description.clone(),
            is_available: self.is_available,
            is_public: self.is_public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_decodes_gallery_images_key() {
        let json = r#"{
            "id": 9, "name": "Mug", "regularPrice": 25, "salePrice": null,
            "isAvailable": true, "isPublic": false,
            "imageFileName": "https://cdn/mug.png",
            "GalleryImages": [{"id": 1, "imageFileName": "https://cdn/g1.png"}]
        }"#;
        let product: ProductDetail = serde_json::from_str(json).unwrap();
        assert_eq!(product.gallery_images.len(), 1);
        assert_eq!(product.sale_price, None);
        assert_eq!(product.short_description, None);
    }

    #[test]
    fn form_coerces_prices_and_round_trips_detail() {
        let mut form = ProductForm {
            name: "Mug".into(),
            regular_price: "25".into(),
            sale_price: "".into(),
            ..Default::default()
        };
        let input = form.to_input();
        assert_eq!(input.regular_price, Some(25.0));
        assert_eq!(input.sale_price, None);

        form.sale_price = "19.9".into();
        let body = serde_json::to_value(form.to_input()).unwrap();
        assert_eq!(body["salePrice"], serde_json::json!(19.9));
        assert_eq!(body["isAvailable"], serde_json::json!(false));
    }
}
