use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::models::{Config, ScoreReport, SessionStatus, WinningDraw};

#[cw_serde]
pub struct InstantiateMsg {
  pub config: Option<Config>,
}

#[cw_serde]
pub enum ExecuteMsg {
  EnterAmount {
    amount: String,
  },
  IssueTickets {
    manual: Vec<Vec<u16>>,
    seed: Option<u32>,
  },
  EnterWinningDraw {
    numbers: Vec<u16>,
    bonus: u16,
  },
  ComputeResults {},
  Restart {},
}

#[cw_serde]
pub enum QueryMsg {
  Config {},
  Session {},
  Tickets {},
  Report {},
  ScoreTicket { numbers: Vec<u16> },
  DryRun { amount: String, seed: u32 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct SessionView {
  pub status: SessionStatus,
  pub amount: Option<Uint128>,
  pub ticket_count: Option<u32>,
  pub tickets: Vec<Vec<u16>>,
  pub draw: Option<WinningDraw>,
  pub report: Option<ScoreReport>,
}

#[cw_serde]
pub struct DryRunResponse {
  pub seed: u32,
  pub tickets: Vec<Vec<u16>>,
  pub draw: WinningDraw,
  pub report: ScoreReport,
}
