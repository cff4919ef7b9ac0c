use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Destination field: which of A, D and M receive the computed value.
/// "store nowhere" is the absence of a destination, encoded `000`.
/// The discriminant is the 3-bit `d1 d2 d3` code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}
