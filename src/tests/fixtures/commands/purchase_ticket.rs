// Shared test fixture for the PurchaseTicket command.

use crate::modules::tickets::use_cases::purchase_ticket::command::PurchaseTicket;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub struct PurchaseTicketBuilder {
    inner: PurchaseTicket,
}

impl Default for PurchaseTicketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseTicketBuilder {
    pub fn new() -> Self {
        Self {
            inner: PurchaseTicket {
                ticket_id: Uuid::from_u128(0x0001),
                screening_id: Uuid::from_u128(0x1001),
                purchased_at: Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap(),
            },
        }
    }

    pub fn ticket_id(mut self, v: Uuid) -> Self {
        self.inner.ticket_id = v;
        self
    }

    pub fn screening_id(mut self, v: Uuid) -> Self {
        self.inner.screening_id = v;
        self
    }

    pub fn purchased_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.purchased_at = v;
        self
    }

    pub fn build(self) -> PurchaseTicket {
        self.inner
    }
}

#[cfg(test)]
mod purchase_ticket_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(
            PurchaseTicketBuilder::default().build(),
            PurchaseTicketBuilder::new().build()
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let custom = PurchaseTicketBuilder::new()
            .ticket_id(Uuid::from_u128(7))
            .screening_id(Uuid::from_u128(8))
            .purchased_at(at)
            .build();

        assert_eq!(custom.ticket_id, Uuid::from_u128(7));
        assert_eq!(custom.screening_id, Uuid::from_u128(8));
        assert_eq!(custom.purchased_at, at);
    }
}
