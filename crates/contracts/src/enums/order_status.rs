use serde::{Deserialize, Serialize};

/// The two order states the editing form may read and write.
///
/// The backend tracks more states than these; every other code refuses the
/// editor at load time, so it never needs a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Esperando Pago (backend code 7). The only state an order may be in
    /// when editing starts.
    AwaitingPayment,
    /// Pagado (backend code 6).
    Paid,
}

impl OrderStatus {
    /// Both values the status select offers, in display order.
    pub const EDITABLE: [OrderStatus; 2] = [OrderStatus::AwaitingPayment, OrderStatus::Paid];

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            7 => Some(OrderStatus::AwaitingPayment),
            6 => Some(OrderStatus::Paid),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            OrderStatus::AwaitingPayment => 7,
            OrderStatus::Paid => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::AwaitingPayment => "Esperando Pago",
            OrderStatus::Paid => "Pagado",
        }
    }

    /// Display label for any backend code, including ones with no variant.
    pub fn label_for_code(code: i32) -> String {
        match Self::from_code(code) {
            Some(status) => status.label().to_string(),
            None => format!("Estado {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for status in OrderStatus::EDITABLE {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unknown_codes_have_no_variant() {
        assert_eq!(OrderStatus::from_code(0), None);
        assert_eq!(OrderStatus::from_code(3), None);
        assert_eq!(OrderStatus::from_code(-7), None);
    }

    #[test]
    fn labels() {
        assert_eq!(OrderStatus::label_for_code(7), "Esperando Pago");
        assert_eq!(OrderStatus::label_for_code(6), "Pagado");
        assert_eq!(OrderStatus::label_for_code(3), "Estado 3");
    }
}
