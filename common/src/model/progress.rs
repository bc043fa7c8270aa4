use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub discipline_id: i64,
    #[serde(default)]
    pub labs_points_awarded: f64,
    #[serde(default)]
    pub lecture_points_awarded: f64,
    #[serde(default)]
    pub test_points_awarded: f64,
    #[serde(default)]
    pub total_awarded: f64,
    #[serde(default)]
    pub total_possible: f64,
}

impl StudentProgress {
    pub fn percentage(&self) -> f64 {
        if self.total_possible > 0.0 {
            self.total_awarded / self.total_possible * 100.0
        } else {
            0.0
        }
    }

    pub fn final_mark(&self) -> u8 {
        final_mark(self.percentage())
    }
}

/// Attended lecture numbers. The server sends either a bare list or
/// `{ "attended": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttendanceWire")]
pub struct Attendance {
    pub attended: Vec<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttendanceWire {
    List(Vec<u32>),
    Wrapped { attended: Vec<u32> },
}

impl From<AttendanceWire> for Attendance {
    fn from(wire: AttendanceWire) -> Self {
        let mut attended = match wire {
            AttendanceWire::List(list) | AttendanceWire::Wrapped { attended: list } => list,
        };
        attended.sort_unstable();
        attended.dedup();
        Attendance { attended }
    }
}

impl Attendance {
    pub fn attended(&self, lecture_no: u32) -> bool {
        self.attended.binary_search(&lecture_no).is_ok()
    }
}

/// Five-point mark from a percentage of the discipline's total.
pub fn final_mark(percentage: f64) -> u8 {
    match percentage {
        p if p >= 85.0 => 5,
        p if p >= 70.0 => 4,
        p if p >= 50.0 => 3,
        _ => 2,
    }
}
