use commons::{PUNCH_TAG, PURCHASE_TAG, REFUND_TAG, TICKETS_PER_OPERATION, WITHDRAW_TAG};
use concordium_std::*;

/// Ticket purchase event data.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct PurchaseEvent {
    /// Account that bought the ticket.
    pub purchaser: AccountAddress,
    pub number_of_tickets: u64,
    /// Amount attached to the purchase.
    pub price_paid: Amount,
}

/// Ticket refund event data.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct RefundEvent {
    /// Account that returned the ticket.
    pub ticketholder: AccountAddress,
    pub number_of_tickets: u64,
    /// Amount transferred back, equal to the price paid on purchase.
    pub amount_refunded: Amount,
}

/// Ticket punch event data.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct PunchEvent {
    /// Account whose ticket was used at the entrance.
    pub attendee: AccountAddress,
    pub number_of_tickets: u64,
}

/// Proceeds withdraw event data.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct WithdrawEvent {
    pub organizer: AccountAddress,
    pub amount: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum TicketBoothEvent {
    Purchase(PurchaseEvent),
    Refund(RefundEvent),
    Punch(PunchEvent),
    Withdraw(WithdrawEvent),
}

impl TicketBoothEvent {
    pub fn purchase(purchaser: AccountAddress, price_paid: Amount) -> Self {
        Self::Purchase(PurchaseEvent {
            purchaser,
            number_of_tickets: TICKETS_PER_OPERATION,
            price_paid,
        })
    }

    pub fn refund(ticketholder: AccountAddress, amount_refunded: Amount) -> Self {
        Self::Refund(RefundEvent {
            ticketholder,
            number_of_tickets: TICKETS_PER_OPERATION,
            amount_refunded,
        })
    }

    pub fn punch(attendee: AccountAddress) -> Self {
        Self::Punch(PunchEvent {
            attendee,
            number_of_tickets: TICKETS_PER_OPERATION,
        })
    }

    pub fn withdraw(organizer: AccountAddress, amount: Amount) -> Self {
        Self::Withdraw(WithdrawEvent { organizer, amount })
    }
}

impl Serial for TicketBoothEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            TicketBoothEvent::Purchase(event) => {
                out.write_u8(PURCHASE_TAG)?;
                event.serial(out)
            }
            TicketBoothEvent::Refund(event) => {
                out.write_u8(REFUND_TAG)?;
                event.serial(out)
            }
            TicketBoothEvent::Punch(event) => {
                out.write_u8(PUNCH_TAG)?;
                event.serial(out)
            }
            TicketBoothEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for TicketBoothEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            PURCHASE_TAG => PurchaseEvent::deserial(source).map(TicketBoothEvent::Purchase),
            REFUND_TAG => RefundEvent::deserial(source).map(TicketBoothEvent::Refund),
            PUNCH_TAG => PunchEvent::deserial(source).map(TicketBoothEvent::Punch),
            WITHDRAW_TAG => WithdrawEvent::deserial(source).map(TicketBoothEvent::Withdraw),
            _ => Err(ParseError::default()),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const USER_1: AccountAddress = AccountAddress([16; 32]);

    #[concordium_test]
    fn test_logged_refund_decodes() {
        let bytes = to_bytes(&TicketBoothEvent::refund(USER_1, Amount::from_micro_ccd(300)));

        claim_eq!(bytes[0], REFUND_TAG);
        claim_eq!(
            from_bytes::<TicketBoothEvent>(&bytes),
            Ok(TicketBoothEvent::Refund(RefundEvent {
                ticketholder: USER_1,
                number_of_tickets: 1,
                amount_refunded: Amount::from_micro_ccd(300),
            }))
        );
    }

    #[concordium_test]
    fn test_unknown_tag_is_rejected() {
        let mut bytes = to_bytes(&TicketBoothEvent::punch(USER_1));
        bytes[0] = 0;

        claim!(from_bytes::<TicketBoothEvent>(&bytes).is_err());
    }
}
