use napi::Result as NapiResult;
use napi_derive::napi;

use tiered_mortgage_core::mortgage::request::{self, FloatingPeriodInput, LoanInput};
use tiered_mortgage_core::mortgage::schedule;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Accepts either a month-level loan config or a form-level loan request.
#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = input.into_config().map_err(to_napi_error)?;
    let output = schedule::compute_schedule(&config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn floating_period(input_json: String) -> NapiResult<String> {
    let input: FloatingPeriodInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = request::compute_floating_period(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
