/// Tag for the Ticket Purchase event.
pub const PURCHASE_TAG: u8 = u8::MAX;

/// Tag for the Ticket Refund event.
pub const REFUND_TAG: u8 = u8::MAX - 1;

/// Tag for the Ticket Punch event.
pub const PUNCH_TAG: u8 = u8::MAX - 2;

/// Tag for the Proceeds Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 3;

/// Number of tickets handled by a single purchase, refund or punch.
pub const TICKETS_PER_OPERATION: u64 = 1;
