// Pure decision function for a purchase.
//
// Purpose
// - Decide from the number of tickets already held for the screening.
//
// Responsibilities
// - Zero tickets: accept and build the ticket from the command.
// - One or more: reject. This is a normal outcome, not a failure.
// - Never perform input or output.

use crate::modules::tickets::use_cases::purchase_ticket::command::PurchaseTicket;
use crate::modules::tickets::use_cases::purchase_ticket::decision::{DecideError, Decision};
use crate::shared::core::entities::Ticket;

pub fn decide_purchase(existing_tickets: usize, command: PurchaseTicket) -> Decision {
    if existing_tickets > 0 {
        return Decision::Rejected {
            reason: DecideError::AlreadyPurchased,
        };
    }
    Decision::Accepted {
        ticket: Ticket {
            id: command.ticket_id,
            screening_id: command.screening_id,
            purchased_at: command.purchased_at,
        },
    }
}
