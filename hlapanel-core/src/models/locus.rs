use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::HlaPanelError;

///
/// The classical HLA loci a panel can be built from.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Locus {
    A,
    B,
    C,
    DRB1,
    DQB1,
    DPB1,
}

impl Locus {
    pub const ALL: [Locus; 6] = [
        Locus::A,
        Locus::B,
        Locus::C,
        Locus::DRB1,
        Locus::DQB1,
        Locus::DPB1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locus::A => "A",
            Locus::B => "B",
            Locus::C => "C",
            Locus::DRB1 => "DRB1",
            Locus::DQB1 => "DQB1",
            Locus::DPB1 => "DPB1",
        }
    }

    pub fn class(&self) -> MhcClass {
        match self {
            Locus::A | Locus::B | Locus::C => MhcClass::ClassI,
            Locus::DRB1 | Locus::DQB1 | Locus::DPB1 => MhcClass::ClassII,
        }
    }
}

impl FromStr for Locus {
    type Err = HlaPanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Locus::A),
            "B" => Ok(Locus::B),
            "C" => Ok(Locus::C),
            "DRB1" => Ok(Locus::DRB1),
            "DQB1" => Ok(Locus::DQB1),
            "DPB1" => Ok(Locus::DPB1),
            other => Err(HlaPanelError::UnknownLocus(other.to_string())),
        }
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// Receptor class. Each class is served by its own prediction tool and
/// owns a disjoint, fixed list of loci.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MhcClass {
    #[cfg_attr(feature = "serde", serde(rename = "class_i"))]
    ClassI,
    #[cfg_attr(feature = "serde", serde(rename = "class_ii"))]
    ClassII,
}

impl MhcClass {
    pub const ALL: [MhcClass; 2] = [MhcClass::ClassI, MhcClass::ClassII];

    /// Loci of this class, in the order the selector visits them.
    pub fn loci(&self) -> &'static [Locus] {
        match self {
            MhcClass::ClassI => &[Locus::A, Locus::B, Locus::C],
            MhcClass::ClassII => &[Locus::DRB1, Locus::DQB1, Locus::DPB1],
        }
    }

    pub fn contains(&self, locus: Locus) -> bool {
        locus.class() == *self
    }

    /// Roman-numeral tag used in output file names, e.g. `classI`.
    pub fn tag(&self) -> &'static str {
        match self {
            MhcClass::ClassI => "classI",
            MhcClass::ClassII => "classII",
        }
    }
}

impl Display for MhcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MhcClass::ClassI => write!(f, "Class I"),
            MhcClass::ClassII => write!(f, "Class II"),
        }
    }
}
