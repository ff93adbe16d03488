use cosmwasm_schema::cw_serde;
use cosmwasm_std::StdError;
use thiserror::Error;

/// Reason an entered purchase amount was refused.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum AmountError {
  NotAnInteger,
  UnderMinPrice,
  NotMultipleOfPrice,
  OverMaxTickets,
}

impl std::fmt::Display for AmountError {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    f.write_str(match self {
      AmountError::NotAnInteger => "NOT_AN_INTEGER",
      AmountError::UnderMinPrice => "UNDER_MIN_PRICE",
      AmountError::NotMultipleOfPrice => "NOT_MULTIPLE_OF_PRICE",
      AmountError::OverMaxTickets => "OVER_MAX_TICKETS",
    })
  }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContractError {
  #[error("{0}")]
  Std(#[from] StdError),

  #[error("InvalidAmount: {0}")]
  InvalidAmount(AmountError),

  #[error("InvalidManualTicketSize")]
  InvalidManualTicketSize,

  #[error("OutOfRangeNumber")]
  OutOfRangeNumber,

  #[error("DuplicateNumbers")]
  DuplicateNumbers,

  #[error("TooManyManualTickets")]
  TooManyManualTickets,

  #[error("TicketAlreadyIssued")]
  TicketAlreadyIssued,

  #[error("InvalidSessionState")]
  InvalidSessionState,

  #[error("PayoutOverflow")]
  PayoutOverflow,

  #[error("ValidationError")]
  ValidationError,
}
