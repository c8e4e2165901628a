use serde::{Deserialize, Serialize};

/// Duty status recorded on a log line.
///
/// Ordering follows the rows of a paper log: OFF, SB, D, ON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DutyStatus {
    #[serde(rename = "OFF")]
    OffDuty,
    #[serde(rename = "SB")]
    SleeperBerth,
    #[serde(rename = "D")]
    Driving,
    #[serde(rename = "ON")]
    OnDutyNotDriving,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Stable short code used in files and exports.
    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving => "D",
            DutyStatus::OnDutyNotDriving => "ON",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }

    /// Grid colour as RGB.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            DutyStatus::OffDuty => (0x4C, 0xAF, 0x50),
            DutyStatus::SleeperBerth => (0x21, 0x96, 0xF3),
            DutyStatus::Driving => (0xF4, 0x43, 0x36),
            DutyStatus::OnDutyNotDriving => (0xFF, 0xC1, 0x07),
        }
    }

    /// Convert code → enum (case-insensitive, surrounding blanks ignored)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "OFF" => Some(DutyStatus::OffDuty),
            "SB" => Some(DutyStatus::SleeperBerth),
            "D" => Some(DutyStatus::Driving),
            "ON" => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
