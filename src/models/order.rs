use serde::{Deserialize, Serialize};
use super::{EntityForm, EntityId};

/// Fila de las tablas de pedidos (all / shipped / to-ship)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub total: f64,
    pub status: String,
    #[serde(default)]
    pub order_placed_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    pub total: f64,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub stripe_payment_intent_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub order_placed_at: Option<String>,
    #[serde(default)]
    pub payment_completed_at: Option<String>,
    #[serde(default)]
    pub shipped_at: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<String>,
}

impl OrderDetail {
    pub fn status(&self) -> OrderStatus {
        OrderStatus::parse(&self.status)
    }
}

/// Estados conocidos del pedido
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    AwaitingPayment,
    PreparingForShipment,
    Shipped,
    Canceled,
    Unknown,
}

impl OrderStatus {
    /// Línea de tiempo que se muestra en el detalle
    pub const TIMELINE: [OrderStatus; 4] = [
        OrderStatus::AwaitingPayment,
        OrderStatus::PreparingForShipment,
        OrderStatus::Shipped,
        OrderStatus::Canceled,
    ];

    /// Opciones del select de edición (valor, etiqueta)
    pub const EDITABLE: [OrderStatus; 3] = [
        OrderStatus::PreparingForShipment,
        OrderStatus::Shipped,
        OrderStatus::Canceled,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "awaiting_payment" => Self::AwaitingPayment,
            "preparing_for_shipment" => Self::PreparingForShipment,
            "shipped" => Self::Shipped,
            "canceled" => Self::Canceled,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingPayment => "awaiting_payment",
            Self::PreparingForShipment => "preparing_for_shipment",
            Self::Shipped => "shipped",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingPayment => "Awaiting payment",
            Self::PreparingForShipment => "Preparing for shipment",
            Self::Shipped => "Shipped",
            Self::Canceled => "Canceled",
            Self::Unknown => "Unknown",
        }
    }

    /// Clase bulma del tag cuando es el estado actual
    pub fn tag_class(&self) -> &'static str {
        match self {
            Self::AwaitingPayment => "is-warning",
            Self::PreparingForShipment => "is-info",
            Self::Shipped => "is-success",
            Self::Canceled => "is-danger",
            Self::Unknown => "",
        }
    }

    pub fn can_ship(&self) -> bool {
        *self == Self::PreparingForShipment
    }

    pub fn can_cancel(&self) -> bool {
        *self != Self::Canceled
    }
}

/// Transportistas (valor enviado al API, nombre visible)
pub const CARRIERS: [(&str, &str); 5] = [
    ("citylinkexpress", "City-Link Express"),
    ("fmx", "FMX"),
    ("ninjavan-my", "Ninja Van Malaysia"),
    ("skynet", "SkyNet Malaysia"),
    ("jtexpress", "J&T EXPRESS MALAYSIA"),
];

pub fn carrier_name(value: &str) -> &str {
    CARRIERS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, name)| *name)
        .unwrap_or(value)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRequest {
    pub carrier: String,
    pub tracking_number: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: String,
    pub carrier: String,
    pub tracking_number: String,
}

/// Formulario de edición de pedido
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderForm {
    pub status: String,
    pub carrier: String,
    pub tracking_number: String,
}

impl EntityForm for OrderForm {
    type Detail = OrderDetail;
    type Input = OrderUpdate;

    fn from_detail(order: &OrderDetail) -> Self {
        Self {
            status: order.status.clone(),
            carrier: order.carrier.clone().unwrap_or_default(),
            tracking_number: order.tracking_number.clone().unwrap_or_default(),
        }
    }

    fn to_input(&self) -> OrderUpdate {
        OrderUpdate {
            status: self.status.clone(),
            carrier: self.carrier.clone(),
            tracking_number: self.tracking_number.trim().to_string(),
        }
    }
}
