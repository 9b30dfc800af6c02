use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Sender is not the event organizer (Error code: -4).
    Unauthorized,
    /// Attached amount differs from the ticket price (Error code: -5).
    InsufficientPayment,
    /// No tickets left for sale (Error code: -6).
    SoldOut,
    /// Sender or holder has no active ticket (Error code: -7).
    NoTicketHeld,
    /// Ticket was already used at the entrance (Error code: -8).
    AlreadyPunched,
    /// Event was finalized and accepts no more updates (Error code: -9).
    EventClosed,
    /// Event was already confirmed (Error code: -10).
    AlreadyConfirmed,
    /// Account already holds a ticket for this event (Error code: -11).
    TicketAlreadyHeld,
    /// Only account addresses can hold tickets (Error code: -12).
    OnlyAccountAddress,
    /// Proceeds are locked until the event is finalized (Error code: -13).
    EventNotFinalized,
    /// Ticket inventory counter would overflow (Error code: -14).
    InventoryOverflow,
    /// Failed to invoke a transfer (Error code: -15).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}
