use commons::{ContractResult, CustomContractError};
use concordium_std::*;

use crate::events::TicketBoothEvent;
use crate::external::*;
use crate::state::{HolderRecord, State};

/// Initialize the ticket booth. The origin account becomes the organizer.
#[init(contract = "TicketBooth", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;

    Ok(State::new(state_builder, ctx.init_origin(), params))
}

/// Tickets can only be held by accounts, since refunds are paid out in CCD.
fn sender_account(ctx: &impl HasReceiveContext) -> ContractResult<AccountAddress> {
    match ctx.sender() {
        Address::Account(account) => Ok(account),
        Address::Contract(_) => Err(CustomContractError::OnlyAccountAddress),
    }
}

/// Buy a ticket. The attached amount must equal the ticket price.
///
/// It rejects if:
/// - Sender is a contract;
/// - Event is finalized;
/// - Attached amount differs from the ticket price;
/// - Sender already holds a ticket;
/// - No tickets are left;
/// - Fails to log `Purchase` event.
#[receive(
    mutable,
    payable,
    contract = "TicketBooth",
    name = "purchaseTicket",
    enable_logger
)]
fn purchase_ticket<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let purchaser = sender_account(ctx)?;

    host.state_mut().purchase(purchaser, amount)?;

    logger.log(&TicketBoothEvent::purchase(purchaser, amount))?;

    Ok(())
}

/// Return the ticket and get back the exact amount paid for it.
///
/// It rejects if:
/// - Sender is a contract;
/// - Event is finalized;
/// - Sender holds no ticket;
/// - Ticket was already punched;
/// - Fails to log `Refund` event;
/// - Fails to transfer the refund.
#[receive(
    mutable,
    contract = "TicketBooth",
    name = "refundTicket",
    enable_logger
)]
fn refund_ticket<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let ticketholder = sender_account(ctx)?;

    let amount_refunded = host.state_mut().refund(ticketholder)?;

    logger.log(&TicketBoothEvent::refund(ticketholder, amount_refunded))?;

    host.invoke_transfer(&ticketholder, amount_refunded)?;

    Ok(())
}

/// Mark the ticket of the given holder as used at the entrance.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the organizer;
/// - Event is finalized;
/// - Holder has no ticket or it was already punched;
/// - Fails to log `Punch` event.
#[receive(
    mutable,
    contract = "TicketBooth",
    name = "punchTicket",
    parameter = "AccountAddress",
    enable_logger
)]
fn punch_ticket<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let attendee: AccountAddress = ctx.parameter_cursor().get()?;

    host.state_mut().punch(&ctx.sender(), attendee)?;

    logger.log(&TicketBoothEvent::punch(attendee))?;

    Ok(())
}

/// Replace the event details link and the ticket price together.
/// Tickets sold earlier keep the price they were paid for.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the organizer;
/// - Event is finalized.
#[receive(
    mutable,
    contract = "TicketBooth",
    name = "updateEventDetails",
    parameter = "UpdateEventDetailsParams"
)]
fn update_event_details<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params = UpdateEventDetailsParams::deserial(&mut ctx.parameter_cursor())?;

    host.state_mut()
        .update_details(&ctx.sender(), params.details_url, params.ticket_price)
}

/// Set the number of tickets left for sale.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not the organizer;
/// - Event is finalized.
#[receive(
    mutable,
    contract = "TicketBooth",
    name = "updateTicketsRemaining",
    parameter = "u64"
)]
fn update_tickets_remaining<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let count: u64 = ctx.parameter_cursor().get()?;

    host.state_mut().update_tickets_remaining(&ctx.sender(), count)
}

#[receive(mutable, contract = "TicketBooth", name = "confirmEvent")]
fn confirm_event<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    host.state_mut().confirm(&ctx.sender())
}

/// Close the event for good. Every later update is rejected.
#[receive(mutable, contract = "TicketBooth", name = "finalizeEvent")]
fn finalize_event<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    host.state_mut().finalize(&ctx.sender())
}

/// Transfer the whole contract balance to the organizer.
///
/// It rejects if:
/// - Sender is not the organizer;
/// - Event is not finalized yet;
/// - Fails to log `Withdraw` event;
/// - Fails to transfer the balance.
#[receive(
    mutable,
    contract = "TicketBooth",
    name = "withdrawProceeds",
    enable_logger
)]
fn withdraw_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let organizer = host.state().proceeds_receiver(&ctx.sender())?;
    let amount = host.self_balance();

    if amount > Amount::zero() {
        logger.log(&TicketBoothEvent::withdraw(organizer, amount))?;
        host.invoke_transfer(&organizer, amount)?;
    }

    Ok(())
}

#[receive(
    contract = "TicketBooth",
    name = "organizer",
    return_value = "AccountAddress"
)]
fn view_organizer<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<AccountAddress> {
    Ok(host.state().organizer)
}

#[receive(
    contract = "TicketBooth",
    name = "settlementAsset",
    return_value = "ContractAddress"
)]
fn view_settlement_asset<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ContractAddress> {
    Ok(host.state().settlement_asset)
}

#[receive(contract = "TicketBooth", name = "detailsURL", return_value = "String")]
fn view_details_url<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<String> {
    Ok(host.state().details_url.clone())
}

#[receive(contract = "TicketBooth", name = "ticketPrice", return_value = "Amount")]
fn view_ticket_price<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    Ok(host.state().ticket_price)
}

#[receive(contract = "TicketBooth", name = "ticketsRemaining", return_value = "u64")]
fn view_tickets_remaining<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u64> {
    Ok(host.state().tickets_remaining)
}

#[receive(contract = "TicketBooth", name = "ticketsSold", return_value = "u64")]
fn view_tickets_sold<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u64> {
    Ok(host.state().tickets_sold)
}

#[receive(contract = "TicketBooth", name = "confirmed", return_value = "bool")]
fn view_confirmed<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    Ok(host.state().confirmed)
}

#[receive(contract = "TicketBooth", name = "finalized", return_value = "bool")]
fn view_finalized<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    Ok(host.state().finalized)
}

/// Ticket status of the given account. Accounts that never bought a ticket
/// get the neutral record.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "TicketBooth",
    name = "ticketHolder",
    parameter = "AccountAddress",
    return_value = "HolderRecord"
)]
fn view_ticket_holder<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<HolderRecord> {
    let account: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().holder(&account))
}

/// View function that returns the whole event configuration at once.
#[receive(contract = "TicketBooth", name = "view", return_value = "EventView")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<EventView> {
    Ok(host.state().view())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ORGANIZER: AccountAddress = AccountAddress([1; 32]);
    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);
    const TOKEN: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const CONTRACT: ContractAddress = ContractAddress {
        index: 16,
        subindex: 16,
    };
    const TICKET_PRICE: Amount = Amount::from_micro_ccd(300);
    const DETAILS_URL: &str = "http://www.meetup.com/event";

    fn default_host() -> TestHost<State<TestStateApi>> {
        let params = InitParams {
            settlement_asset: TOKEN,
            details_url: String::from(DETAILS_URL),
            ticket_price: TICKET_PRICE,
            tickets_remaining: 10,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ORGANIZER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_TicketBooth");

        TestHost::new(state, state_builder)
    }

    fn sender_ctx<'a>(sender: AccountAddress) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender));
        ctx
    }

    fn purchase(
        host: &mut TestHost<State<TestStateApi>>,
        buyer: AccountAddress,
        amount: Amount,
    ) -> ContractResult<()> {
        let mut logger = TestLogger::init();
        purchase_ticket(&sender_ctx(buyer), host, amount, &mut logger)
    }

    fn refund(
        host: &mut TestHost<State<TestStateApi>>,
        holder: AccountAddress,
    ) -> ContractResult<()> {
        let mut logger = TestLogger::init();
        refund_ticket(&sender_ctx(holder), host, &mut logger)
    }

    fn punch(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        holder: AccountAddress,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&holder);
        let mut ctx = sender_ctx(sender);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();
        punch_ticket(&ctx, host, &mut logger)
    }

    fn set_details(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        details_url: &str,
        ticket_price: Amount,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&UpdateEventDetailsParams {
            details_url: String::from(details_url),
            ticket_price,
        });
        let mut ctx = sender_ctx(sender);
        ctx.set_parameter(&bytes);
        update_event_details(&ctx, host)
    }

    fn set_tickets_remaining(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        count: u64,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&count);
        let mut ctx = sender_ctx(sender);
        ctx.set_parameter(&bytes);
        update_tickets_remaining(&ctx, host)
    }

    fn holder(host: &TestHost<State<TestStateApi>>, account: AccountAddress) -> HolderRecord {
        let bytes = to_bytes(&account);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        view_ticket_holder(&ctx, host).expect_report("Failed to call ticketHolder")
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(view_organizer(&ctx, &host), Ok(ORGANIZER));
        claim_eq!(view_settlement_asset(&ctx, &host), Ok(TOKEN));
        claim_eq!(view_details_url(&ctx, &host), Ok(String::from(DETAILS_URL)));
        claim_eq!(view_ticket_price(&ctx, &host), Ok(TICKET_PRICE));
        claim_eq!(view_tickets_remaining(&ctx, &host), Ok(10));
        claim_eq!(view_tickets_sold(&ctx, &host), Ok(0));
        claim_eq!(view_confirmed(&ctx, &host), Ok(false));
        claim_eq!(view_finalized(&ctx, &host), Ok(false));
        claim_eq!(holder(&host, USER_1), HolderRecord::default());
    }

    #[concordium_test]
    fn test_view() {
        let mut host = default_host();
        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));

        let ctx = TestReceiveContext::empty();
        let result = view(&ctx, &host).expect_report("Failed to call view");

        claim_eq!(
            result,
            EventView {
                organizer: ORGANIZER,
                settlement_asset: TOKEN,
                details_url: String::from(DETAILS_URL),
                ticket_price: TICKET_PRICE,
                tickets_remaining: 9,
                tickets_sold: 1,
                confirmed: false,
                finalized: false,
            }
        );
    }

    #[concordium_test]
    fn test_purchase_and_refund() {
        let mut host = default_host();

        let mut logger = TestLogger::init();
        let result = purchase_ticket(&sender_ctx(USER_1), &mut host, TICKET_PRICE, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().tickets_remaining, 9);
        claim_eq!(host.state().tickets_sold, 1);
        claim_eq!(
            holder(&host, USER_1),
            HolderRecord {
                purchased: true,
                punched: false,
                amount_paid: TICKET_PRICE,
            }
        );
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&TicketBoothEvent::purchase(USER_1, TICKET_PRICE))
        );

        host.set_self_balance(TICKET_PRICE);
        let mut logger = TestLogger::init();
        let result = refund_ticket(&sender_ctx(USER_1), &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&USER_1, TICKET_PRICE));
        claim_eq!(host.state().tickets_remaining, 10);
        claim_eq!(host.state().tickets_sold, 0);
        claim_eq!(holder(&host, USER_1), HolderRecord::default());
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&TicketBoothEvent::refund(USER_1, TICKET_PRICE))
        );
    }

    #[concordium_test]
    fn test_purchase_wrong_amount() {
        let mut host = default_host();

        let amounts = [
            Amount::from_micro_ccd(299),
            Amount::from_micro_ccd(301),
            Amount::zero(),
        ];
        for amount in amounts {
            let mut logger = TestLogger::init();
            let result = purchase_ticket(&sender_ctx(USER_1), &mut host, amount, &mut logger);

            claim_eq!(result, Err(CustomContractError::InsufficientPayment));
            claim!(logger.logs.is_empty());
        }

        claim_eq!(host.state().tickets_remaining, 10);
        claim_eq!(host.state().tickets_sold, 0);
        claim_eq!(holder(&host, USER_1), HolderRecord::default());
    }

    #[concordium_test]
    fn test_purchase_sold_out() {
        let mut host = default_host();
        claim_eq!(set_tickets_remaining(&mut host, ORGANIZER, 1), Ok(()));

        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));
        claim_eq!(
            purchase(&mut host, USER_2, TICKET_PRICE),
            Err(CustomContractError::SoldOut)
        );
        claim_eq!(host.state().tickets_remaining, 0);
        claim_eq!(host.state().tickets_sold, 1);
        claim_eq!(holder(&host, USER_2), HolderRecord::default());
    }

    #[concordium_test]
    fn test_purchase_twice() {
        let mut host = default_host();

        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));
        claim_eq!(
            purchase(&mut host, USER_1, TICKET_PRICE),
            Err(CustomContractError::TicketAlreadyHeld)
        );
        claim_eq!(host.state().tickets_sold, 1);
    }

    #[concordium_test]
    fn test_contract_cannot_hold_tickets() {
        let mut host = default_host();
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(CONTRACT));

        let mut logger = TestLogger::init();
        let result = purchase_ticket(&ctx, &mut host, TICKET_PRICE, &mut logger);
        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress));

        let result = refund_ticket(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress));

        claim!(logger.logs.is_empty());
        claim_eq!(host.state().tickets_sold, 0);
    }

    #[concordium_test]
    fn test_refund_without_ticket() {
        let mut host = default_host();

        claim_eq!(
            refund(&mut host, USER_1),
            Err(CustomContractError::NoTicketHeld)
        );
        claim!(!host.transfer_occurred(&USER_1, TICKET_PRICE));
        claim_eq!(host.state().tickets_remaining, 10);
    }

    #[concordium_test]
    fn test_refund_pays_recorded_amount() {
        let mut host = default_host();

        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));
        claim_eq!(
            set_details(
                &mut host,
                ORGANIZER,
                "https://new.example",
                Amount::from_micro_ccd(12345)
            ),
            Ok(())
        );

        host.set_self_balance(TICKET_PRICE);
        claim_eq!(refund(&mut host, USER_1), Ok(()));
        claim!(host.transfer_occurred(&USER_1, TICKET_PRICE));
        claim_eq!(host.state().ticket_price, Amount::from_micro_ccd(12345));
    }

    #[concordium_test]
    fn test_punch_then_refund() {
        let mut host = default_host();
        claim_eq!(purchase(&mut host, USER_2, TICKET_PRICE), Ok(()));

        let bytes = to_bytes(&USER_2);
        let mut ctx = sender_ctx(ORGANIZER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let result = punch_ticket(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs, vec![to_bytes(&TicketBoothEvent::punch(USER_2))]);
        claim_eq!(
            holder(&host, USER_2),
            HolderRecord {
                purchased: true,
                punched: true,
                amount_paid: TICKET_PRICE,
            }
        );

        host.set_self_balance(TICKET_PRICE);
        claim_eq!(
            refund(&mut host, USER_2),
            Err(CustomContractError::AlreadyPunched)
        );
        claim!(!host.transfer_occurred(&USER_2, TICKET_PRICE));
        claim_eq!(host.state().tickets_sold, 1);

        claim_eq!(
            punch(&mut host, ORGANIZER, USER_2),
            Err(CustomContractError::AlreadyPunched)
        );
    }

    #[concordium_test]
    fn test_punch_rejections() {
        let mut host = default_host();

        claim_eq!(
            punch(&mut host, ORGANIZER, USER_1),
            Err(CustomContractError::NoTicketHeld)
        );

        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));
        claim_eq!(
            punch(&mut host, USER_2, USER_1),
            Err(CustomContractError::Unauthorized)
        );
        claim!(!holder(&host, USER_1).punched);
    }

    #[concordium_test]
    fn test_update_event_details() {
        let mut host = default_host();

        claim_eq!(
            set_details(
                &mut host,
                ORGANIZER,
                "https://www.somewhereelse.com/",
                Amount::from_micro_ccd(12345)
            ),
            Ok(())
        );
        claim_eq!(
            host.state().details_url,
            String::from("https://www.somewhereelse.com/")
        );
        claim_eq!(host.state().ticket_price, Amount::from_micro_ccd(12345));

        claim_eq!(
            set_details(&mut host, USER_1, "https://new.example", Amount::from_micro_ccd(1)),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            host.state().details_url,
            String::from("https://www.somewhereelse.com/")
        );
        claim_eq!(host.state().ticket_price, Amount::from_micro_ccd(12345));
    }

    #[concordium_test]
    fn test_update_tickets_remaining() {
        let mut host = default_host();
        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));

        claim_eq!(set_tickets_remaining(&mut host, ORGANIZER, 55), Ok(()));
        claim_eq!(host.state().tickets_remaining, 55);
        claim_eq!(host.state().tickets_sold, 1);

        claim_eq!(
            set_tickets_remaining(&mut host, USER_1, 1000),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(host.state().tickets_remaining, 55);
    }

    #[concordium_test]
    fn test_confirm_event() {
        let mut host = default_host();

        claim_eq!(
            confirm_event(&sender_ctx(USER_1), &mut host),
            Err(CustomContractError::Unauthorized)
        );
        claim!(!host.state().confirmed);

        claim_eq!(confirm_event(&sender_ctx(ORGANIZER), &mut host), Ok(()));
        claim!(host.state().confirmed);

        claim_eq!(
            confirm_event(&sender_ctx(ORGANIZER), &mut host),
            Err(CustomContractError::AlreadyConfirmed)
        );
        claim!(host.state().confirmed);
    }

    #[concordium_test]
    fn test_finalize_event_closes_booth() {
        let mut host = default_host();
        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));

        claim_eq!(
            finalize_event(&sender_ctx(USER_1), &mut host),
            Err(CustomContractError::Unauthorized)
        );
        claim!(!host.state().finalized);

        claim_eq!(finalize_event(&sender_ctx(ORGANIZER), &mut host), Ok(()));
        claim!(host.state().finalized);

        claim_eq!(
            purchase(&mut host, USER_2, TICKET_PRICE),
            Err(CustomContractError::EventClosed)
        );
        claim_eq!(
            refund(&mut host, USER_1),
            Err(CustomContractError::EventClosed)
        );
        claim_eq!(
            punch(&mut host, ORGANIZER, USER_1),
            Err(CustomContractError::EventClosed)
        );
        claim_eq!(
            set_details(&mut host, ORGANIZER, "https://new.example", TICKET_PRICE),
            Err(CustomContractError::EventClosed)
        );
        claim_eq!(
            set_tickets_remaining(&mut host, ORGANIZER, 55),
            Err(CustomContractError::EventClosed)
        );
        claim_eq!(
            confirm_event(&sender_ctx(ORGANIZER), &mut host),
            Err(CustomContractError::EventClosed)
        );
        claim_eq!(
            finalize_event(&sender_ctx(ORGANIZER), &mut host),
            Err(CustomContractError::EventClosed)
        );

        claim_eq!(
            host.state().view(),
            EventView {
                organizer: ORGANIZER,
                settlement_asset: TOKEN,
                details_url: String::from(DETAILS_URL),
                ticket_price: TICKET_PRICE,
                tickets_remaining: 9,
                tickets_sold: 1,
                confirmed: false,
                finalized: true,
            }
        );
        claim!(holder(&host, USER_1).purchased);
    }

    #[concordium_test]
    fn test_withdraw_proceeds() {
        let mut host = default_host();
        claim_eq!(purchase(&mut host, USER_1, TICKET_PRICE), Ok(()));
        claim_eq!(purchase(&mut host, USER_2, TICKET_PRICE), Ok(()));
        host.set_self_balance(TICKET_PRICE * 2);

        let mut logger = TestLogger::init();
        claim_eq!(
            withdraw_proceeds(&sender_ctx(ORGANIZER), &mut host, &mut logger),
            Err(CustomContractError::EventNotFinalized)
        );

        claim_eq!(finalize_event(&sender_ctx(ORGANIZER), &mut host), Ok(()));

        claim_eq!(
            withdraw_proceeds(&sender_ctx(USER_1), &mut host, &mut logger),
            Err(CustomContractError::Unauthorized)
        );
        claim!(!host.transfer_occurred(&USER_1, TICKET_PRICE * 2));

        claim_eq!(
            withdraw_proceeds(&sender_ctx(ORGANIZER), &mut host, &mut logger),
            Ok(())
        );
        claim!(host.transfer_occurred(&ORGANIZER, TICKET_PRICE * 2));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&TicketBoothEvent::withdraw(
                ORGANIZER,
                TICKET_PRICE * 2
            ))]
        );
    }

    #[concordium_test]
    fn test_withdraw_empty_balance() {
        let mut host = default_host();
        claim_eq!(finalize_event(&sender_ctx(ORGANIZER), &mut host), Ok(()));
        host.set_self_balance(Amount::zero());

        let mut logger = TestLogger::init();
        claim_eq!(
            withdraw_proceeds(&sender_ctx(ORGANIZER), &mut host, &mut logger),
            Ok(())
        );
        claim!(logger.logs.is_empty());
        claim!(!host.transfer_occurred(&ORGANIZER, Amount::zero()));
    }
}
