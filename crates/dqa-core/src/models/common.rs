//! Fixed selections offered by the evaluation forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Countries covered by the regional program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Country {
    Honduras,
    Guatemala,
    #[serde(rename = "El Salvador")]
    ElSalvador,
    Nicaragua,
    #[serde(rename = "Panamá")]
    Panama,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Honduras,
        Country::Guatemala,
        Country::ElSalvador,
        Country::Nicaragua,
        Country::Panama,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Honduras => "Honduras",
            Country::Guatemala => "Guatemala",
            Country::ElSalvador => "El Salvador",
            Country::Nicaragua => "Nicaragua",
            Country::Panama => "Panamá",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "country",
                value: s.to_string(),
            })
    }
}

/// Reporting month of an HTS_TST review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReportMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl ReportMonth {
    pub const ALL: [ReportMonth; 12] = [
        ReportMonth::January,
        ReportMonth::February,
        ReportMonth::March,
        ReportMonth::April,
        ReportMonth::May,
        ReportMonth::June,
        ReportMonth::July,
        ReportMonth::August,
        ReportMonth::September,
        ReportMonth::October,
        ReportMonth::November,
        ReportMonth::December,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportMonth::January => "January",
            ReportMonth::February => "February",
            ReportMonth::March => "March",
            ReportMonth::April => "April",
            ReportMonth::May => "May",
            ReportMonth::June => "June",
            ReportMonth::July => "July",
            ReportMonth::August => "August",
            ReportMonth::September => "September",
            ReportMonth::October => "October",
            ReportMonth::November => "November",
            ReportMonth::December => "December",
        }
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A "Sí"/"No" radio answer. Stored in sheets with the accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    #[serde(rename = "Sí")]
    Si,
    No,
}

impl YesNo {
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Si => "Sí",
            YesNo::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Si } else { YesNo::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for YesNo {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sí" => Ok(YesNo::Si),
            "No" => Ok(YesNo::No),
            other => Err(CoreError::UnknownVariant {
                kind: "yes/no answer",
                value: other.to_string(),
            }),
        }
    }
}

/// Fiscal reporting quarter. The fiscal year starts in October, so Q1 ends
/// in December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn label(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quarter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quarter::ALL
            .into_iter()
            .find(|q| q.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "quarter",
                value: s.to_string(),
            })
    }
}
