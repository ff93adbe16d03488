use std::collections::HashSet;

use cosmwasm_schema::cw_serde;

use crate::error::{AmountError, ContractError};
use crate::models::{Config, WinningDraw};
use crate::util::require_valid_numbers;
use crate::xorshift32::RandomSource;

/// One purchased lotto entry. A ticket starts empty and is filled exactly
/// once, either by hand or by an automatic draw.
#[cw_serde]
#[derive(Default)]
pub struct Ticket {
  numbers: Vec<u16>,
}

impl Ticket {
  pub fn new() -> Self {
    Self::default()
  }

  /// Copy of the ticket's numbers, in the order they were chosen.
  pub fn numbers(&self) -> Vec<u16> {
    self.numbers.clone()
  }

  pub fn is_issued(&self) -> bool {
    !self.numbers.is_empty()
  }

  pub fn contains(
    &self,
    n: u16,
  ) -> bool {
    self.numbers.contains(&n)
  }

  /// Assign numbers chosen by the player. Only the count is checked here;
  /// range and duplicate checks belong to `create_manual_ticket`.
  pub fn set_numbers(
    &mut self,
    candidate: &[u16],
    config: &Config,
  ) -> Result<(), ContractError> {
    if self.is_issued() {
      return Err(ContractError::TicketAlreadyIssued);
    }
    if candidate.len() != config.number_count as usize {
      return Err(ContractError::InvalidManualTicketSize);
    }
    self.numbers = candidate.to_vec();
    Ok(())
  }

  pub fn set_numbers_by_auto(
    &mut self,
    rng: &mut impl RandomSource,
    config: &Config,
  ) -> Result<(), ContractError> {
    if self.is_issued() {
      return Err(ContractError::TicketAlreadyIssued);
    }
    self.numbers = draw_distinct(rng, config, config.number_count as usize);
    Ok(())
  }
}

/// Draw `count` distinct numbers within the configured bounds. The returned
/// vec keeps draw order; the set only rejects repeats.
pub fn draw_distinct(
  rng: &mut impl RandomSource,
  config: &Config,
  count: usize,
) -> Vec<u16> {
  let mut seen: HashSet<u16> = HashSet::with_capacity(count);
  let mut numbers: Vec<u16> = Vec::with_capacity(count);
  while numbers.len() < count {
    let n = rng.random_int_in_range(config.min_number as u32, config.max_number as u32) as u16;
    if seen.insert(n) {
      numbers.push(n);
    }
  }
  numbers
}

pub fn create_auto_ticket(
  rng: &mut impl RandomSource,
  config: &Config,
) -> Result<Ticket, ContractError> {
  let mut ticket = Ticket::new();
  ticket.set_numbers_by_auto(rng, config)?;
  Ok(ticket)
}

/// Draw a full set of winning numbers plus a bonus distinct from all of them.
pub fn create_auto_draw(
  rng: &mut impl RandomSource,
  config: &Config,
) -> WinningDraw {
  let mut numbers = draw_distinct(rng, config, config.number_count as usize + 1);
  let bonus = numbers.pop().unwrap_or_default();
  WinningDraw { numbers, bonus }
}

pub fn create_manual_ticket(
  numbers: &[u16],
  config: &Config,
) -> Result<Ticket, ContractError> {
  require_valid_numbers(numbers, config)?;
  let mut ticket = Ticket::new();
  ticket.set_numbers(numbers, config)?;
  Ok(ticket)
}

/// Issue `total` tickets: the manual ones first, in the order given, then
/// automatic tickets for the remainder. Every manual ticket is validated
/// before any random numbers are drawn.
pub fn generate_tickets(
  manual: &[Vec<u16>],
  total: u32,
  rng: &mut impl RandomSource,
  config: &Config,
) -> Result<Vec<Ticket>, ContractError> {
  if total > config.max_tickets {
    return Err(ContractError::InvalidAmount(AmountError::OverMaxTickets));
  }
  if manual.len() > total as usize {
    return Err(ContractError::TooManyManualTickets);
  }
  let mut tickets: Vec<Ticket> = Vec::with_capacity(total as usize);
  for numbers in manual.iter() {
    tickets.push(create_manual_ticket(numbers, config)?);
  }
  while tickets.len() < total as usize {
    tickets.push(create_auto_ticket(rng, config)?);
  }
  Ok(tickets)
}
