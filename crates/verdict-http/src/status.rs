use verdict::{OutcomeExt, codes};

/// The HTTP statuses an outcome can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpStatus {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,
}

impl HttpStatus {
    /// Pick the status for `outcome`.
    ///
    /// Rules are checked in order: `not_found`, `validation_failed`,
    /// `unauthorized` and `forbidden` (matched against the outcome's code or
    /// any of its errors), then any other failure with errors is a 500 and
    /// any other failure a 400. Successes are 200.
    pub fn for_outcome<O: OutcomeExt>(outcome: &O) -> Self {
        if outcome.is_success() {
            return Self::Ok;
        }
        if outcome.failed_because(codes::NOT_FOUND) {
            Self::NotFound
        } else if outcome.failed_because(codes::VALIDATION_FAILED) {
            Self::BadRequest
        } else if outcome.failed_because(codes::UNAUTHORIZED) {
            Self::Unauthorized
        } else if outcome.failed_because(codes::FORBIDDEN) {
            Self::Forbidden
        } else if outcome.has_errors() {
            Self::InternalServerError
        } else {
            Self::BadRequest
        }
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn is_success(self) -> bool {
        self == Self::Ok
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Numeric HTTP status for `outcome`. See [`HttpStatus::for_outcome`].
pub fn status_code_for<O: OutcomeExt>(outcome: &O) -> u16 {
    HttpStatus::for_outcome(outcome).as_u16()
}
