use std::collections::HashSet;

use cosmwasm_std::{Addr, Empty, Uint128};
use cw_lotto_sim::contract::{execute, instantiate, query};
use cw_lotto_sim::models::{Config, Payout, ScoreReport, SessionStatus, Tier};
use cw_lotto_sim::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, SessionView};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

fn lotto_contract() -> Box<dyn Contract<Empty>> {
  Box::new(ContractWrapper::new(execute, instantiate, query))
}

fn player() -> Addr {
  Addr::unchecked("player")
}

fn setup(config: Option<Config>) -> (App, Addr) {
  let mut app = App::default();
  let code_id = app.store_code(lotto_contract());
  let addr = app
    .instantiate_contract(
      code_id,
      player(),
      &InstantiateMsg { config },
      &[],
      "lotto-sim",
      None,
    )
    .unwrap();
  (app, addr)
}

fn session(
  app: &App,
  addr: &Addr,
) -> SessionView {
  app
    .wrap()
    .query_wasm_smart(addr.clone(), &QueryMsg::Session {})
    .unwrap()
}

fn run(
  app: &mut App,
  addr: &Addr,
  msg: ExecuteMsg,
) -> Result<(), String> {
  app
    .execute_contract(player(), addr.clone(), &msg, &[])
    .map(|_| ())
    .map_err(|e| e.root_cause().to_string())
}

#[test]
fn purchase_issues_one_ticket_per_price_unit() {
  let (mut app, addr) = setup(None);
  run(
    &mut app,
    &addr,
    ExecuteMsg::EnterAmount {
      amount: "5000".to_string(),
    },
  )
  .unwrap();
  run(
    &mut app,
    &addr,
    ExecuteMsg::IssueTickets {
      manual: vec![],
      seed: None,
    },
  )
  .unwrap();

  let view = session(&app, &addr);
  assert_eq!(view.status, SessionStatus::TicketsIssued);
  assert_eq!(view.tickets.len(), 5);
  for numbers in view.tickets.iter() {
    let distinct: HashSet<u16> = numbers.iter().copied().collect();
    assert_eq!(distinct.len(), 6);
    assert!(numbers.iter().all(|n| (1..=45).contains(n)));
  }
}

#[test]
fn short_and_fractional_amounts_issue_nothing() {
  let (mut app, addr) = setup(None);
  for amount in ["500", "5000.5"] {
    let err = run(
      &mut app,
      &addr,
      ExecuteMsg::EnterAmount {
        amount: amount.to_string(),
      },
    )
    .unwrap_err();
    assert!(err.starts_with("InvalidAmount"), "{}", err);
  }
  let view = session(&app, &addr);
  assert_eq!(view.status, SessionStatus::Empty);
  assert!(view.tickets.is_empty());
}

#[test]
fn manual_tickets_come_first() {
  let (mut app, addr) = setup(None);
  run(
    &mut app,
    &addr,
    ExecuteMsg::EnterAmount {
      amount: "5000".to_string(),
    },
  )
  .unwrap();

  let err = run(
    &mut app,
    &addr,
    ExecuteMsg::IssueTickets {
      manual: vec![vec![1, 2, 3, 4, 5, 6]; 6],
      seed: None,
    },
  )
  .unwrap_err();
  assert_eq!(err, "TooManyManualTickets");

  run(
    &mut app,
    &addr,
    ExecuteMsg::IssueTickets {
      manual: vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 10, 11, 12]],
      seed: Some(3),
    },
  )
  .unwrap();

  let tickets: Vec<Vec<u16>> = app
    .wrap()
    .query_wasm_smart(addr.clone(), &QueryMsg::Tickets {})
    .unwrap();
  assert_eq!(tickets.len(), 5);
  assert_eq!(tickets[0], vec![1, 2, 3, 4, 5, 6]);
  assert_eq!(tickets[1], vec![7, 8, 9, 10, 11, 12]);
}

#[test]
fn winning_numbers_are_validated() {
  let (mut app, addr) = setup(None);
  run(
    &mut app,
    &addr,
    ExecuteMsg::EnterAmount {
      amount: "1000".to_string(),
    },
  )
  .unwrap();
  run(
    &mut app,
    &addr,
    ExecuteMsg::IssueTickets {
      manual: vec![],
      seed: None,
    },
  )
  .unwrap();

  let duplicated = run(
    &mut app,
    &addr,
    ExecuteMsg::EnterWinningDraw {
      numbers: vec![5, 5, 5, 5, 5, 5],
      bonus: 5,
    },
  )
  .unwrap_err();
  assert_eq!(duplicated, "DuplicateNumbers");

  let out_of_range = run(
    &mut app,
    &addr,
    ExecuteMsg::EnterWinningDraw {
      numbers: vec![55, 65, 75, 85, 95, 105],
      bonus: 115,
    },
  )
  .unwrap_err();
  assert_eq!(out_of_range, "OutOfRangeNumber");

  assert_eq!(session(&app, &addr).status, SessionStatus::TicketsIssued);
  assert_eq!(session(&app, &addr).draw, None);
}

#[test]
fn jackpot_report_and_restart() {
  let config = Config {
    payouts: vec![
      Payout::new(Tier::First, 2_000_000_000),
      Payout::new(Tier::Fifth, 5_000),
    ],
    ..Config::default()
  };
  let (mut app, addr) = setup(Some(config));
  run(
    &mut app,
    &addr,
    ExecuteMsg::EnterAmount {
      amount: "1000".to_string(),
    },
  )
  .unwrap();
  run(
    &mut app,
    &addr,
    ExecuteMsg::IssueTickets {
      manual: vec![vec![1, 2, 3, 4, 5, 6]],
      seed: None,
    },
  )
  .unwrap();
  run(
    &mut app,
    &addr,
    ExecuteMsg::EnterWinningDraw {
      numbers: vec![6, 5, 4, 3, 2, 1],
      bonus: 7,
    },
  )
  .unwrap();
  run(&mut app, &addr, ExecuteMsg::ComputeResults {}).unwrap();

  let report: Option<ScoreReport> = app
    .wrap()
    .query_wasm_smart(addr.clone(), &QueryMsg::Report {})
    .unwrap();
  let report = report.unwrap();
  assert_eq!(report.count(Tier::First), 1);
  assert_eq!(report.count(Tier::Second), 0);
  assert_eq!(report.histogram.len(), 6);
  assert_eq!(report.total_payout, Uint128::from(2_000_000_000u128));
  assert_eq!(report.profit_rate_percent.to_string(), "200000000");

  run(&mut app, &addr, ExecuteMsg::Restart {}).unwrap();
  let view = session(&app, &addr);
  assert_eq!(view.status, SessionStatus::Empty);
  assert_eq!(view.amount, None);
  assert_eq!(view.ticket_count, None);
  assert!(view.tickets.is_empty());
  assert_eq!(view.draw, None);
  assert_eq!(view.report, None);

  // A fresh purchase is accepted after the restart.
  run(
    &mut app,
    &addr,
    ExecuteMsg::EnterAmount {
      amount: "2000".to_string(),
    },
  )
  .unwrap();
  assert_eq!(session(&app, &addr).ticket_count, Some(2));
}
