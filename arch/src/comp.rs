use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The 28 computations the ALU can perform, one variant per mnemonic.
///
/// The textual form is the exact, case-sensitive mnemonic. The 7-bit code
/// is the `a` bit followed by `c1..c6`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "-1")]
    MinusOne,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "!D")]
    NotD,
    #[strum(serialize = "!A")]
    NotA,
    #[strum(serialize = "-D")]
    MinusD,
    #[strum(serialize = "-A")]
    MinusA,
    #[strum(serialize = "D+1")]
    DPlusOne,
    #[strum(serialize = "A+1")]
    APlusOne,
    #[strum(serialize = "D-1")]
    DMinusOne,
    #[strum(serialize = "A-1")]
    AMinusOne,
    #[strum(serialize = "D+A")]
    DPlusA,
    #[strum(serialize = "D-A")]
    DMinusA,
    #[strum(serialize = "A-D")]
    AMinusD,
    #[strum(serialize = "D&A")]
    DAndA,
    #[strum(serialize = "D|A")]
    DOrA,
    #[strum(serialize = "M")]
    M,
    #[strum(serialize = "!M")]
    NotM,
    #[strum(serialize = "-M")]
    MinusM,
    #[strum(serialize = "M+1")]
    MPlusOne,
    #[strum(serialize = "M-1")]
    MMinusOne,
    #[strum(serialize = "D+M")]
    DPlusM,
    #[strum(serialize = "D-M")]
    DMinusM,
    #[strum(serialize = "M-D")]
    MMinusD,
    #[strum(serialize = "D&M")]
    DAndM,
    #[strum(serialize = "D|M")]
    DOrM,
}

impl Comp {
    pub fn bits(self) -> u16 {
        match self {
            Comp::Zero => 0b0101010,
            Comp::One => 0b0111111,
            Comp::MinusOne => 0b0111010,
            Comp::D => 0b0001100,
            Comp::A => 0b0110000,
            Comp::NotD => 0b0001111,
            Comp::NotA => 0b0110001,
            Comp::MinusD => 0b0001111,
            Comp::MinusA => 0b0110011,
            Comp::DPlusOne => 0b0011111,
            Comp::APlusOne => 0b0110111,
            Comp::DMinusOne => 0b0001110,
            Comp::AMinusOne => 0b0110010,
            Comp::DPlusA => 0b0000010,
            Comp::DMinusA => 0b0010011,
            Comp::AMinusD => 0b0000111,
            Comp::DAndA => 0b0000000,
            Comp::DOrA => 0b0010101,
            Comp::M => 0b1110000,
            Comp::NotM => 0b1110001,
            Comp::MinusM => 0b1110011,
            Comp::MPlusOne => 0b1110111,
            Comp::MMinusOne => 0b1110010,
            Comp::DPlusM => 0b1000010,
            Comp::DMinusM => 0b1010011,
            Comp::MMinusD => 0b1000111,
            Comp::DAndM => 0b1000000,
            Comp::DOrM => 0b1010101,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_comp {
        ($($name:ident: $mnemonic:expr => $variant:ident, $bits:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let comp: Comp = $mnemonic.parse().unwrap();
                    assert_eq!(comp, Comp::$variant);
                    assert_eq!(comp.bits(), $bits);
                    assert_eq!(comp.to_string(), $mnemonic);
                }
            )*
        }
    }

    test_comp! {
        test_zero: "0" => Zero, 0b0101010,
        test_one: "1" => One, 0b0111111,
        test_minus_one: "-1" => MinusOne, 0b0111010,
        test_d: "D" => D, 0b0001100,
        test_a: "A" => A, 0b0110000,
        test_not_d: "!D" => NotD, 0b0001111,
        test_not_a: "!A" => NotA, 0b0110001,
        test_minus_d: "-D" => MinusD, 0b0001111,
        test_minus_a: "-A" => MinusA, 0b0110011,
        test_d_plus_one: "D+1" => DPlusOne, 0b0011111,
        test_a_plus_one: "A+1" => APlusOne, 0b0110111,
        test_d_minus_one: "D-1" => DMinusOne, 0b0001110,
        test_a_minus_one: "A-1" => AMinusOne, 0b0110010,
        test_d_plus_a: "D+A" => DPlusA, 0b0000010,
        test_d_minus_a: "D-A" => DMinusA, 0b0010011,
        test_a_minus_d: "A-D" => AMinusD, 0b0000111,
        test_d_and_a: "D&A" => DAndA, 0b0000000,
        test_d_or_a: "D|A" => DOrA, 0b0010101,
        test_m: "M" => M, 0b1110000,
        test_not_m: "!M" => NotM, 0b1110001,
        test_minus_m: "-M" => MinusM, 0b1110011,
        test_m_plus_one: "M+1" => MPlusOne, 0b1110111,
        test_m_minus_one: "M-1" => MMinusOne, 0b1110010,
        test_d_plus_m: "D+M" => DPlusM, 0b1000010,
        test_d_minus_m: "D-M" => DMinusM, 0b1010011,
        test_m_minus_d: "M-D" => MMinusD, 0b1000111,
        test_d_and_m: "D&M" => DAndM, 0b1000000,
        test_d_or_m: "D|M" => DOrM, 0b1010101,
    }

    #[test]
    fn test_unknown() {
        assert!("D+2".parse::<Comp>().is_err());
        assert!("A+D".parse::<Comp>().is_err());
    }

    #[test]
    fn test_case_sensitive() {
        assert!("d".parse::<Comp>().is_err());
        assert!("m+1".parse::<Comp>().is_err());
    }
}
