//! It exposes the errors, event tags and types shared by the ticketing contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, types::*};
use concordium_std::*;

mod constants;
mod errors;
mod types;
