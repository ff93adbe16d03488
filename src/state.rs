use crate::error::ContractError;
use crate::models::{Config, ScoreReport, SessionStatus, WinningDraw};
use crate::msg::InstantiateMsg;
use crate::ticket::Ticket;
use crate::xorshift32::Xorshift32;
use cosmwasm_std::{DepsMut, Env, Storage, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<Config> = Item::new("config");

pub const SESSION_STATUS: Item<SessionStatus> = Item::new("session_status");
pub const SESSION_AMOUNT: Item<Uint128> = Item::new("session_amount");
pub const SESSION_TICKET_COUNT: Item<u32> = Item::new("session_ticket_count");
pub const SESSION_TICKETS: Item<Vec<Ticket>> = Item::new("session_tickets");
pub const WINNING_DRAW: Item<WinningDraw> = Item::new("winning_draw");
pub const REPORT: Item<ScoreReport> = Item::new("report");

pub fn initialize(
  deps: DepsMut,
  msg: &InstantiateMsg,
) -> Result<(), ContractError> {
  let config = msg.config.clone().unwrap_or_default();
  config.validate()?;

  CONFIG.save(deps.storage, &config)?;
  reset_session(deps.storage)?;

  Ok(())
}

/// Abort unless the session is currently in the `expected` status.
pub fn require_status(
  storage: &dyn Storage,
  expected: SessionStatus,
) -> Result<(), ContractError> {
  if SESSION_STATUS.load(storage)? != expected {
    return Err(ContractError::InvalidSessionState);
  }
  Ok(())
}

/// Drop everything belonging to the current purchase session.
pub fn reset_session(storage: &mut dyn Storage) -> Result<(), ContractError> {
  SESSION_STATUS.save(storage, &SessionStatus::Empty)?;
  SESSION_AMOUNT.remove(storage);
  SESSION_TICKET_COUNT.remove(storage);
  SESSION_TICKETS.remove(storage);
  WINNING_DRAW.remove(storage);
  REPORT.remove(storage);
  Ok(())
}

pub fn load_tickets(storage: &dyn Storage) -> Result<Vec<Ticket>, ContractError> {
  Ok(SESSION_TICKETS.may_load(storage)?.unwrap_or_default())
}

pub fn load_winning_draw(storage: &dyn Storage) -> Result<WinningDraw, ContractError> {
  WINNING_DRAW
    .may_load(storage)?
    .ok_or(ContractError::InvalidSessionState)
}

/// Seed the automatic draw from block data mixed with an optional
/// player-supplied seed.
pub fn build_rng(
  env: &Env,
  seed: Option<u32>,
) -> Xorshift32 {
  Xorshift32::from_components(&[
    env.block.height,
    env.block.time.nanos(),
    env
      .transaction
      .as_ref()
      .map(|t| t.index as u64)
      .unwrap_or(0u64),
    seed.unwrap_or(0) as u64,
  ])
}
