use crate::game::timecycle::TimeCycleModifierModType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{name}` is out of range: {value} is not within [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: String,
        min: String,
        max: String,
    },
    #[error("`{0}` can't be negative")]
    Negative(&'static str),
    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
    #[error("modifier already contains a mod of type `{0}`")]
    DuplicateMod(TimeCycleModifierModType),
    #[error("modifier doesn't contain a mod of type `{0}`")]
    MissingMod(TimeCycleModifierModType),
    #[error("the name `{0}` is already in use")]
    NameInUse(String),
    #[error("modifier slot {0} is empty")]
    EmptySlot(usize),
    #[error("native array is full ({0} entries)")]
    CapacityExceeded(usize),
    #[error("native allocator returned null for {0} bytes")]
    Allocation(usize),
    #[error("natives aren't installed yet")]
    NativesMissing,
    #[error("missing native handler for 0x{0:016X}")]
    MissingHandler(u64),
    #[error("scaleform movie `{0}` couldn't be requested")]
    ScaleformRequest(String),
    #[error("invalid pattern symbol `{0}`")]
    InvalidPattern(String),
    #[error("pattern for {0} not found")]
    PatternNotFound(&'static str),
    #[error("time cycle isn't resolved")]
    TimeCycleMissing,
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("malformed settings")]
    Settings(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn out_of_range<V>(name: &'static str, value: V, min: V, max: V) -> Error
        where V: std::fmt::Display
    {
        Error::OutOfRange {
            name,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
