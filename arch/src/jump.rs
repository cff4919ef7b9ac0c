use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Jump condition on the computed value. "no jump" is the absence of a
/// condition, encoded `000`. The discriminant is the 3-bit `j1 j2 j3` code.
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
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}
