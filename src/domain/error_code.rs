#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS Connect `err` code.
///
/// `0` means success. The value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether the gateway reported a failure (`err > 0`).
    pub fn is_failure(self) -> bool {
        self.0 > 0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Human-readable description; unmapped codes yield `"unknown error"`.
    pub fn description(self) -> &'static str {
        self.known()
            .map(KnownErrorCode::description)
            .unwrap_or(UNKNOWN_ERROR)
    }

    /// Returns `true` if the code points at login, signature, clock, IP, or salt problems.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

const UNKNOWN_ERROR: &str = "unknown error";

/// Describe a raw gateway error code.
pub fn describe(code: i32) -> &'static str {
    ErrorCode::new(code).description()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Error codes documented by SMS Connect.
pub enum KnownErrorCode {
    Unknown,
    InvalidLogin,
    InvalidHashOrPassword,
    InvalidTime,
    IpNotAllowed,
    InvalidAction,
    SaltAlreadyUsed,
    DatabaseUnavailable,
    InsufficientCredit,
    InvalidRecipientNumber,
    EmptyMessageText,
    MessageTooLong,
}

impl KnownErrorCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::Unknown,
            2 => Self::InvalidLogin,
            3 => Self::InvalidHashOrPassword,
            4 => Self::InvalidTime,
            5 => Self::IpNotAllowed,
            6 => Self::InvalidAction,
            7 => Self::SaltAlreadyUsed,
            8 => Self::DatabaseUnavailable,
            9 => Self::InsufficientCredit,
            10 => Self::InvalidRecipientNumber,
            11 => Self::EmptyMessageText,
            12 => Self::MessageTooLong,
            _ => return None,
        })
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 1,
            Self::InvalidLogin => 2,
            Self::InvalidHashOrPassword => 3,
            Self::InvalidTime => 4,
            Self::IpNotAllowed => 5,
            Self::InvalidAction => 6,
            Self::SaltAlreadyUsed => 7,
            Self::DatabaseUnavailable => 8,
            Self::InsufficientCredit => 9,
            Self::InvalidRecipientNumber => 10,
            Self::EmptyMessageText => 11,
            Self::MessageTooLong => 12,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => UNKNOWN_ERROR,
            Self::InvalidLogin => "invalid login",
            Self::InvalidHashOrPassword => {
                "invalid hash or password (depending on the login security variant)"
            }
            Self::InvalidTime => {
                "invalid time, the clock difference between servers exceeds the maximum accepted in the SMS Connect settings"
            }
            Self::IpNotAllowed => "IP address not allowed, see the SMS Connect settings",
            Self::InvalidAction => "invalid action name",
            Self::SaltAlreadyUsed => "this salt has already been used today",
            Self::DatabaseUnavailable => "no connection to the database could be established",
            Self::InsufficientCredit => "insufficient credit",
            Self::InvalidRecipientNumber => "invalid recipient number",
            Self::EmptyMessageText => "empty message text",
            Self::MessageTooLong => "SMS is longer than the allowed 459 characters",
        }
    }

    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidLogin
                | Self::InvalidHashOrPassword
                | Self::InvalidTime
                | Self::IpNotAllowed
                | Self::SaltAlreadyUsed
        )
    }
}
