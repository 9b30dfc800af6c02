//! A ticket booth smart contract for a single event.
//!
//! # Description
//! An instance of this contract sells tickets for one event at a fixed price.
//! The account that initializes the instance becomes the event organizer and
//! is the only one allowed to change the event details, correct the ticket
//! inventory, punch tickets at the entrance, confirm and finalize the event.
//!
//! Any account can buy one ticket by attaching exactly the ticket price to
//! `purchaseTicket`, and can get that exact amount back through `refundTicket`
//! as long as the ticket was not punched and the event is not finalized.
//! Once the event is finalized the organizer can withdraw the proceeds.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
