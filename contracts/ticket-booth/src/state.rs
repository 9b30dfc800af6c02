use commons::{ContractResult, CustomContractError, TICKETS_PER_OPERATION};
use concordium_std::*;

use crate::external::{EventView, InitParams};

/// Ticket status of a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct HolderRecord {
    /// The account holds a ticket that was not refunded.
    pub purchased: bool,
    /// The ticket was used at the entrance. Punched tickets stay purchased.
    pub punched: bool,
    /// Exact amount paid on purchase, returned on refund.
    pub amount_paid: Amount,
}

/// Accounts that never bought a ticket, or got their refund, hold this record.
impl Default for HolderRecord {
    fn default() -> Self {
        Self {
            purchased: false,
            punched: false,
            amount_paid: Amount::zero(),
        }
    }
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account that administers the event.
    pub organizer: AccountAddress,
    /// Token contract the event refers to. Payments are made in CCD.
    pub settlement_asset: ContractAddress,
    /// Link to the event description.
    pub details_url: String,
    /// Price of a single ticket.
    pub ticket_price: Amount,
    /// Tickets available for sale.
    pub tickets_remaining: u64,
    /// Tickets held by accounts, punched ones included.
    pub tickets_sold: u64,
    /// Set once by the organizer.
    pub confirmed: bool,
    /// Set once by the organizer. No updates are accepted afterwards.
    pub finalized: bool,
    /// Ticket status per account.
    holders: StateMap<AccountAddress, HolderRecord, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state for an event with no tickets sold.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        organizer: AccountAddress,
        params: InitParams,
    ) -> Self {
        Self {
            organizer,
            settlement_asset: params.settlement_asset,
            details_url: params.details_url,
            ticket_price: params.ticket_price,
            tickets_remaining: params.tickets_remaining,
            tickets_sold: 0,
            confirmed: false,
            finalized: false,
            holders: state_builder.new_map(),
        }
    }

    fn ensure_organizer(&self, sender: &Address) -> ContractResult<()> {
        ensure!(
            sender.matches_account(&self.organizer),
            CustomContractError::Unauthorized
        );
        Ok(())
    }

    fn ensure_open(&self) -> ContractResult<()> {
        ensure!(!self.finalized, CustomContractError::EventClosed);
        Ok(())
    }

    /// Ticket status of `account`, the neutral record if it never bought one.
    pub fn holder(&self, account: &AccountAddress) -> HolderRecord {
        self.holders
            .get(account)
            .map(|record| *record)
            .unwrap_or_default()
    }

    pub fn view(&self) -> EventView {
        EventView {
            organizer: self.organizer,
            settlement_asset: self.settlement_asset,
            details_url: self.details_url.clone(),
            ticket_price: self.ticket_price,
            tickets_remaining: self.tickets_remaining,
            tickets_sold: self.tickets_sold,
            confirmed: self.confirmed,
            finalized: self.finalized,
        }
    }

    /// Sell one ticket to `buyer` for the attached `amount`.
    pub fn purchase(&mut self, buyer: AccountAddress, amount: Amount) -> ContractResult<()> {
        self.ensure_open()?;
        ensure_eq!(
            amount,
            self.ticket_price,
            CustomContractError::InsufficientPayment
        );
        ensure!(
            !self.holder(&buyer).purchased,
            CustomContractError::TicketAlreadyHeld
        );
        ensure!(
            self.tickets_remaining >= TICKETS_PER_OPERATION,
            CustomContractError::SoldOut
        );

        self.tickets_remaining -= TICKETS_PER_OPERATION;
        self.tickets_sold += TICKETS_PER_OPERATION;
        self.holders.insert(
            buyer,
            HolderRecord {
                purchased: true,
                punched: false,
                amount_paid: amount,
            },
        );

        Ok(())
    }

    /// Take back the ticket of `holder` and return the amount that MUST be
    /// transferred back to it.
    pub fn refund(&mut self, holder: AccountAddress) -> ContractResult<Amount> {
        self.ensure_open()?;
        let record = self.holder(&holder);
        ensure!(record.purchased, CustomContractError::NoTicketHeld);
        ensure!(!record.punched, CustomContractError::AlreadyPunched);

        self.tickets_remaining = self
            .tickets_remaining
            .checked_add(TICKETS_PER_OPERATION)
            .ok_or(CustomContractError::InventoryOverflow)?;
        // Every purchased record is counted in `tickets_sold`.
        self.tickets_sold -= TICKETS_PER_OPERATION;
        self.holders.insert(holder, HolderRecord::default());

        Ok(record.amount_paid)
    }

    /// Mark the ticket of `holder` as used at the entrance.
    pub fn punch(&mut self, sender: &Address, holder: AccountAddress) -> ContractResult<()> {
        self.ensure_organizer(sender)?;
        self.ensure_open()?;
        let mut record = self.holder(&holder);
        ensure!(record.purchased, CustomContractError::NoTicketHeld);
        ensure!(!record.punched, CustomContractError::AlreadyPunched);

        record.punched = true;
        self.holders.insert(holder, record);

        Ok(())
    }

    pub fn update_details(
        &mut self,
        sender: &Address,
        details_url: String,
        ticket_price: Amount,
    ) -> ContractResult<()> {
        self.ensure_organizer(sender)?;
        self.ensure_open()?;

        self.details_url = details_url;
        self.ticket_price = ticket_price;

        Ok(())
    }

    /// Overwrite the inventory. It is not checked against `tickets_sold`.
    pub fn update_tickets_remaining(&mut self, sender: &Address, count: u64) -> ContractResult<()> {
        self.ensure_organizer(sender)?;
        self.ensure_open()?;

        self.tickets_remaining = count;

        Ok(())
    }

    pub fn confirm(&mut self, sender: &Address) -> ContractResult<()> {
        self.ensure_organizer(sender)?;
        self.ensure_open()?;
        ensure!(!self.confirmed, CustomContractError::AlreadyConfirmed);

        self.confirmed = true;

        Ok(())
    }

    pub fn finalize(&mut self, sender: &Address) -> ContractResult<()> {
        self.ensure_organizer(sender)?;
        self.ensure_open()?;

        self.finalized = true;

        Ok(())
    }

    /// Account that receives the proceeds. Only available after finalization,
    /// when no refund can be claimed anymore.
    pub fn proceeds_receiver(&self, sender: &Address) -> ContractResult<AccountAddress> {
        self.ensure_organizer(sender)?;
        ensure!(self.finalized, CustomContractError::EventNotFinalized);

        Ok(self.organizer)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ORGANIZER: AccountAddress = AccountAddress([1; 32]);
    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);
    const USER_3: AccountAddress = AccountAddress([18; 32]);
    const TOKEN: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const PRICE: Amount = Amount::from_micro_ccd(300);

    fn default_state() -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        State::new(
            &mut state_builder,
            ORGANIZER,
            InitParams {
                settlement_asset: TOKEN,
                details_url: String::from("http://www.meetup.com/event"),
                ticket_price: PRICE,
                tickets_remaining: 10,
            },
        )
    }

    fn purchased_records(state: &State<TestStateApi>) -> u64 {
        state
            .holders
            .iter()
            .filter(|(_, record)| record.purchased)
            .count() as u64
    }

    #[concordium_test]
    fn test_new_state() {
        let state = default_state();

        claim_eq!(state.organizer, ORGANIZER);
        claim_eq!(state.settlement_asset, TOKEN);
        claim_eq!(state.details_url, String::from("http://www.meetup.com/event"));
        claim_eq!(state.ticket_price, PRICE);
        claim_eq!(state.tickets_remaining, 10);
        claim_eq!(state.tickets_sold, 0);
        claim!(!state.confirmed);
        claim!(!state.finalized);
        claim!(state.holders.is_empty());
    }

    #[concordium_test]
    fn test_inventory_is_conserved() {
        let mut state = default_state();

        claim_eq!(state.purchase(USER_1, PRICE), Ok(()));
        claim_eq!(state.purchase(USER_2, PRICE), Ok(()));
        claim_eq!(state.purchase(USER_3, PRICE), Ok(()));
        claim_eq!(state.refund(USER_2), Ok(PRICE));
        claim_eq!(state.purchase(USER_2, PRICE), Ok(()));
        claim_eq!(state.refund(USER_1), Ok(PRICE));

        claim_eq!(state.tickets_sold + state.tickets_remaining, 10);
        claim_eq!(state.tickets_sold, 2);
        claim_eq!(purchased_records(&state), state.tickets_sold);

        // Administrative correction starts a new baseline
        claim_eq!(
            state.update_tickets_remaining(&Address::Account(ORGANIZER), 4),
            Ok(())
        );
        claim_eq!(state.refund(USER_3), Ok(PRICE));
        claim_eq!(state.tickets_sold + state.tickets_remaining, 4 + 2);
        claim_eq!(purchased_records(&state), state.tickets_sold);
    }

    #[concordium_test]
    fn test_punched_tickets_stay_sold() {
        let mut state = default_state();

        claim_eq!(state.purchase(USER_1, PRICE), Ok(()));
        claim_eq!(state.punch(&Address::Account(ORGANIZER), USER_1), Ok(()));

        claim_eq!(
            state.holder(&USER_1),
            HolderRecord {
                purchased: true,
                punched: true,
                amount_paid: PRICE,
            }
        );
        claim_eq!(state.tickets_sold, 1);
        claim_eq!(purchased_records(&state), 1);

        // A punched holder can neither refund nor buy a second ticket
        claim_eq!(
            state.refund(USER_1),
            Err(CustomContractError::AlreadyPunched)
        );
        claim_eq!(
            state.purchase(USER_1, PRICE),
            Err(CustomContractError::TicketAlreadyHeld)
        );
        claim_eq!(state.tickets_sold, 1);
        claim_eq!(state.tickets_remaining, 9);
    }

    #[concordium_test]
    fn test_new_cycle_records_new_price() {
        let mut state = default_state();
        let organizer = Address::Account(ORGANIZER);

        claim_eq!(state.purchase(USER_1, PRICE), Ok(()));
        claim_eq!(
            state.update_details(
                &organizer,
                String::from("https://new.example"),
                Amount::from_micro_ccd(500)
            ),
            Ok(())
        );
        claim_eq!(state.refund(USER_1), Ok(PRICE));
        claim_eq!(state.holder(&USER_1), HolderRecord::default());

        claim_eq!(state.purchase(USER_1, Amount::from_micro_ccd(500)), Ok(()));
        claim_eq!(state.holder(&USER_1).amount_paid, Amount::from_micro_ccd(500));
    }

    #[concordium_test]
    fn test_failed_purchase_keeps_state() {
        let mut state = default_state();

        claim_eq!(
            state.purchase(USER_1, Amount::from_micro_ccd(299)),
            Err(CustomContractError::InsufficientPayment)
        );
        claim_eq!(state.tickets_remaining, 10);
        claim_eq!(state.tickets_sold, 0);
        claim!(state.holders.is_empty());

        claim_eq!(
            state.update_tickets_remaining(&Address::Account(ORGANIZER), 0),
            Ok(())
        );
        claim_eq!(
            state.purchase(USER_1, PRICE),
            Err(CustomContractError::SoldOut)
        );
        claim_eq!(state.tickets_remaining, 0);
        claim_eq!(state.tickets_sold, 0);
        claim!(state.holders.is_empty());
    }

    #[concordium_test]
    fn test_holder_paying_wrong_amount() {
        let mut state = default_state();

        claim_eq!(state.purchase(USER_1, PRICE), Ok(()));
        claim_eq!(
            state.purchase(USER_1, Amount::from_micro_ccd(299)),
            Err(CustomContractError::InsufficientPayment)
        );
        claim_eq!(
            state.purchase(USER_1, Amount::from_micro_ccd(301)),
            Err(CustomContractError::InsufficientPayment)
        );
        claim_eq!(state.tickets_sold, 1);
        claim_eq!(state.tickets_remaining, 9);
        claim_eq!(state.holder(&USER_1).amount_paid, PRICE);
    }

    #[concordium_test]
    fn test_refund_inventory_overflow() {
        let mut state = default_state();

        claim_eq!(state.purchase(USER_1, PRICE), Ok(()));
        claim_eq!(
            state.update_tickets_remaining(&Address::Account(ORGANIZER), u64::MAX),
            Ok(())
        );
        claim_eq!(
            state.refund(USER_1),
            Err(CustomContractError::InventoryOverflow)
        );
        claim!(state.holder(&USER_1).purchased);
        claim_eq!(state.tickets_sold, 1);
    }

    #[concordium_test]
    fn test_authorization_comes_first() {
        let mut state = default_state();
        let organizer = Address::Account(ORGANIZER);
        let stranger = Address::Account(USER_1);

        claim_eq!(state.finalize(&organizer), Ok(()));

        claim_eq!(
            state.punch(&stranger, USER_2),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            state.confirm(&stranger),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            state.finalize(&stranger),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            state.proceeds_receiver(&stranger),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(state.proceeds_receiver(&organizer), Ok(ORGANIZER));
    }

    #[concordium_test]
    fn test_contract_organizer_is_rejected() {
        let mut state = default_state();
        let contract = Address::Contract(ContractAddress {
            index: 1,
            subindex: 0,
        });

        claim_eq!(
            state.confirm(&contract),
            Err(CustomContractError::Unauthorized)
        );
        claim!(!state.confirmed);
    }
}
