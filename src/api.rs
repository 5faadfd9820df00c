//! The request handling layer of the puzzle service.
//!
//! Two operations are exposed: [`check`] tests a single placement against
//! the row, column and region constraints, [`solve`] completes a puzzle.
//! Both take requests with optional fields, as delivered by a web
//! framework's body parser, and return responses that serialize into the
//! service's JSON wire format. All failures are reported as data carrying
//! exactly one message, never as a panic or a partial result.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Digit, Sudoku};
use crate::errors::{LineParseError, Unsolvable};
use crate::placement::{self, Unit};

/// Body of a placement check request. Fields absent from the request body
/// deserialize to `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct CheckRequest {
    /// The puzzle in line format.
    #[serde(default)]
    pub puzzle: Option<String>,
    /// The target cell as an alphanumeric coordinate, e.g. `A2`.
    #[serde(default)]
    pub coordinate: Option<String>,
    /// The candidate digit, a single character `1`-`9`.
    #[serde(default)]
    pub value: Option<String>,
}

/// Body of a solve request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct SolveRequest {
    /// The puzzle in line format.
    #[serde(default)]
    pub puzzle: Option<String>,
}

/// An error reported to the client of either operation.
///
/// The `Display` messages are the exact strings serialized into the
/// `error` field of the JSON response.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ApiError {
    /// One or more of the check request fields are absent or empty.
    #[error("Required field(s) missing")]
    MissingFields,
    /// The puzzle string failed validation.
    #[error(transparent)]
    BadPuzzle(#[from] LineParseError),
    /// The coordinate does not match `[A-I][1-9]` (case insensitive).
    #[error("Invalid coordinate")]
    BadCoordinate,
    /// The value is not a single digit `1`-`9`.
    #[error("Invalid value")]
    BadValue,
    /// The puzzle has no solution.
    #[error(transparent)]
    Unsolvable(#[from] Unsolvable),
}

/// Response to a [`check`] request.
///
/// Serializes into one of the wire shapes `{"valid":true}`,
/// `{"valid":false,"conflict":[...]}` or `{"error":"..."}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The request was well formed and the placement was evaluated.
    Placement {
        /// Whether the placement conflicts with no unit.
        valid: bool,
        /// The conflicting units in row, column, region order.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        conflict: Vec<Unit>,
    },
    /// The request was rejected.
    Failure {
        /// The user visible error message.
        error: String,
    },
}

/// Response to a [`solve`] request.
///
/// Serializes into `{"solution":"..."}` or `{"error":"..."}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved.
    Solution {
        /// The completed 81 character line.
        solution: String,
    },
    /// The request was rejected or the puzzle is unsolvable.
    Failure {
        /// The user visible error message.
        error: String,
    },
}

impl From<ApiError> for CheckResponse {
    fn from(err: ApiError) -> Self {
        CheckResponse::Failure {
            error: err.to_string(),
        }
    }
}

impl From<ApiError> for SolveResponse {
    fn from(err: ApiError) -> Self {
        SolveResponse::Failure {
            error: err.to_string(),
        }
    }
}

/// Checks whether placing a digit at a coordinate is consistent with the
/// rest of the puzzle.
///
/// The target cell is emptied before the check so that a digit already
/// entered there never conflicts with itself. The request fields are
/// validated in order: presence of all three, then the puzzle, then the
/// coordinate, then the value.
pub fn check(request: &CheckRequest) -> CheckResponse {
    match try_check(request) {
        Ok(conflict) => CheckResponse::Placement {
            valid: conflict.is_empty(),
            conflict,
        },
        Err(err) => err.into(),
    }
}

fn try_check(request: &CheckRequest) -> Result<Vec<Unit>, ApiError> {
    let (puzzle, coordinate, value) = match (
        request.puzzle.as_deref(),
        request.coordinate.as_deref(),
        request.value.as_deref(),
    ) {
        (Some(p), Some(c), Some(v)) if !p.is_empty() && !c.is_empty() && !v.is_empty() => (p, c, v),
        _ => return Err(ApiError::MissingFields),
    };

    let mut sudoku = Sudoku::from_str_line(puzzle)?;
    let cell = Cell::from_coordinate(coordinate).ok_or(ApiError::BadCoordinate)?;
    let digit = parse_value(value).ok_or(ApiError::BadValue)?;

    sudoku.clear(cell);
    let conflict = placement::conflicts(&sudoku, cell, digit);
    log::debug!("check {} at {}: conflicts {:?}", digit, cell, conflict);
    Ok(conflict)
}

/// Solves a puzzle and returns the completed line.
///
/// The puzzle is validated before any search work begins; a malformed
/// board is never searched.
pub fn solve(request: &SolveRequest) -> SolveResponse {
    match try_solve(request) {
        Ok(solution) => SolveResponse::Solution { solution },
        Err(err) => err.into(),
    }
}

fn try_solve(request: &SolveRequest) -> Result<String, ApiError> {
    // an absent field and an empty one get the same report,
    // which from_str_line produces for the empty string
    let puzzle = request.puzzle.as_deref().unwrap_or("");
    let sudoku = Sudoku::from_str_line(puzzle)?;
    let solution = sudoku.solve()?;
    log::debug!("solved {} -> {}", sudoku, solution);
    Ok(solution.to_str_line())
}

fn parse_value(value: &str) -> Option<Digit> {
    let mut chars = value.chars();
    let digit = Digit::from_ascii(chars.next()?)?;
    match chars.next() {
        Some(_) => None,
        None => Some(digit),
    }
}
