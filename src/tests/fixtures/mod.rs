pub mod catalogue;
pub mod state;

pub mod commands {
    pub mod purchase_ticket;
}
