use concordium_std::*;

/// Parameters for creating the event.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Token contract the event refers to.
    pub settlement_asset: ContractAddress,
    /// Link to the event description.
    pub details_url: String,
    /// Price of a single ticket.
    pub ticket_price: Amount,
    /// Tickets available for sale.
    pub tickets_remaining: u64,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct UpdateEventDetailsParams {
    pub details_url: String,
    pub ticket_price: Amount,
}

/// Snapshot of the event configuration.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct EventView {
    pub organizer: AccountAddress,
    pub settlement_asset: ContractAddress,
    pub details_url: String,
    pub ticket_price: Amount,
    pub tickets_remaining: u64,
    pub tickets_sold: u64,
    pub confirmed: bool,
    pub finalized: bool,
}
