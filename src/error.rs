pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// The mean was queried before any element was visited.
    EmptyMean,
    /// Adding `amount` to `value` would leave `i32`.
    Overflow { value: i32, amount: i32 },
    /// `len` consecutive values from `start` do not fit in `i32`.
    OutOfRange { len: usize, start: i32 },
    InvalidConfig(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Error::Io(e) => write!(fmt, "io error: {e}"),
            Error::Serde(e) => write!(fmt, "serialization error: {e}"),
            Error::EmptyMean => write!(fmt, "mean is undefined: no elements were visited"),
            Error::Overflow { value, amount } => {
                write!(fmt, "adding {amount} to {value} overflows i32")
            }
            Error::OutOfRange { len, start } => {
                write!(fmt, "sequence of {len} starting at {start} does not fit in i32")
            }
            Error::InvalidConfig(msg) => write!(fmt, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
