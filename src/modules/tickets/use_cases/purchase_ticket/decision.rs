use crate::shared::core::entities::Ticket;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("screening already has a ticket")]
    AlreadyPurchased,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { ticket: Ticket },
    Rejected { reason: DecideError },
}
