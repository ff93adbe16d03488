use std::collections::{HashMap, HashSet};

use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::models::{
  Config, ScoreReport, Tier, TicketScore, TierCount, WinningDraw, MIN_WINNING_MATCHES,
};
use crate::ticket::Ticket;
use crate::util::profit_rate_percent;

/// Number of the ticket's numbers that appear among the winning numbers.
pub fn count_matches(
  ticket: &Ticket,
  winning_numbers: &HashSet<u16>,
) -> u8 {
  let mut n_matching_numbers: u8 = 0;
  for x in ticket.numbers().iter() {
    if winning_numbers.contains(x) {
      n_matching_numbers += 1;
    }
  }
  n_matching_numbers
}

pub fn classify(
  matches: u8,
  bonus_matched: bool,
  number_count: u8,
) -> Tier {
  if matches < MIN_WINNING_MATCHES {
    return Tier::Miss;
  }
  let missed = number_count.saturating_sub(matches);
  match (missed, bonus_matched) {
    (0, _) => Tier::First,
    (1, true) => Tier::Second,
    (1, false) => Tier::Third,
    (2, _) => Tier::Fourth,
    (3, _) => Tier::Fifth,
    _ => Tier::Miss,
  }
}

pub fn score_ticket(
  ticket: &Ticket,
  draw: &WinningDraw,
  config: &Config,
) -> TicketScore {
  let winning_numbers: HashSet<u16> = draw.numbers.iter().copied().collect();
  score_against(ticket, &winning_numbers, draw.bonus, config)
}

fn score_against(
  ticket: &Ticket,
  winning_numbers: &HashSet<u16>,
  bonus: u16,
  config: &Config,
) -> TicketScore {
  let matches = count_matches(ticket, winning_numbers);
  let bonus_matched = ticket.contains(bonus);
  TicketScore {
    matches,
    bonus_matched,
    tier: classify(matches, bonus_matched, config.number_count),
  }
}

/// Classify every ticket, tally a histogram over all tiers (zero counts
/// included, best tier first) and compute the profit rate against `amount`.
pub fn score_all(
  tickets: &[Ticket],
  draw: &WinningDraw,
  amount: Uint128,
  config: &Config,
) -> Result<ScoreReport, ContractError> {
  let winning_numbers: HashSet<u16> = draw.numbers.iter().copied().collect();
  let mut counts: HashMap<Tier, u32> = HashMap::with_capacity(Tier::ALL.len());

  for ticket in tickets.iter() {
    let score = score_against(ticket, &winning_numbers, draw.bonus, config);
    *counts.entry(score.tier).or_insert(0) += 1;
  }

  let histogram: Vec<TierCount> = Tier::ALL
    .iter()
    .map(|tier| TierCount {
      tier: *tier,
      count: counts.get(tier).copied().unwrap_or(0),
    })
    .collect();

  let mut total_payout = Uint128::zero();
  for c in histogram.iter().filter(|c| c.tier.is_winning()) {
    let tier_payout = config
      .payout(c.tier)
      .checked_mul(Uint128::from(c.count))
      .map_err(|_| ContractError::PayoutOverflow)?;
    total_payout = total_payout
      .checked_add(tier_payout)
      .map_err(|_| ContractError::PayoutOverflow)?;
  }

  Ok(ScoreReport {
    profit_rate_percent: profit_rate_percent(total_payout, amount)?,
    total_payout,
    histogram,
  })
}
