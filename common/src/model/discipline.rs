use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A course-like grouping with lecture/lab/test point allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lecture_count: u32,
    #[serde(default)]
    pub lecture_points: u32,
    #[serde(default)]
    pub test_points: u32,
    #[serde(default)]
    pub test_id: Option<i64>,
    #[serde(default)]
    pub lab_count: Option<u32>,
    #[serde(default)]
    pub labs: Vec<DisciplineLab>,
    #[serde(default)]
    pub group_ids: Vec<i64>,
}

impl Discipline {
    pub fn lab_points(&self) -> u32 {
        self.labs.iter().map(|lab| lab.points).sum()
    }

    pub fn total_points(&self) -> u32 {
        self.lecture_points + self.test_points + self.lab_points()
    }

    /// Number of labs, preferring the explicit count the server reports.
    pub fn labs_len(&self) -> u32 {
        self.lab_count.unwrap_or(self.labs.len() as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineLab {
    pub lab_id: i64,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Full-object payload for discipline POST and PUT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplineInput {
    pub name: String,
    pub description: String,
    pub lecture_count: u32,
    pub lecture_points: u32,
    pub test_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i64>,
    pub lab_count: u32,
    pub labs: Vec<DisciplineLab>,
    pub group_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A lab typed into the discipline form that does not exist on the server yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLab {
    /// Form-local number, used for default titles and removal.
    pub number: u32,
    pub title: String,
    pub points: u32,
}

/// State of the create/edit discipline form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisciplineDraft {
    pub name: String,
    pub description: String,
    pub lecture_count: u32,
    pub lecture_points: u32,
    pub test_points: u32,
    pub test_id: Option<i64>,
    pub group_ids: Vec<i64>,
    /// Labs already attached on the server (edit mode).
    pub existing_labs: Vec<DisciplineLab>,
    /// Labs to create before the discipline is saved.
    pub pending_labs: Vec<PendingLab>,
}

impl DisciplineDraft {
    /// Defaults of a fresh create form.
    pub fn new() -> Self {
        Self {
            lecture_count: 1,
            lecture_points: 10,
            test_points: 10,
            ..Self::default()
        }
    }

    pub fn from_discipline(discipline: &Discipline) -> Self {
        Self {
            name: discipline.name.clone(),
            description: discipline.description.clone().unwrap_or_default(),
            lecture_count: discipline.lecture_count,
            lecture_points: discipline.lecture_points,
            test_points: discipline.test_points,
            test_id: discipline.test_id,
            group_ids: discipline.group_ids.clone(),
            existing_labs: discipline.labs.clone(),
            pending_labs: Vec::new(),
        }
    }

    /// Appends a lab numbered after the highest one in the form.
    pub fn add_lab(&mut self) {
        let highest_existing = self.existing_labs.len() as u32;
        let number = self
            .pending_labs
            .iter()
            .map(|lab| lab.number)
            .max()
            .unwrap_or(highest_existing)
            + 1;
        self.pending_labs.push(PendingLab {
            number,
            title: format!("Лабораторная работа {}", number),
            points: 10,
        });
    }

    pub fn remove_lab(&mut self, number: u32) {
        self.pending_labs.retain(|lab| lab.number != number);
    }

    pub fn set_lab_points(&mut self, number: u32, points: u32) {
        if let Some(lab) = self.pending_labs.iter_mut().find(|lab| lab.number == number) {
            lab.points = points;
        }
    }

    pub fn set_lab_title(&mut self, number: u32, title: String) {
        if let Some(lab) = self.pending_labs.iter_mut().find(|lab| lab.number == number) {
            lab.title = title;
        }
    }

    pub fn lab_points(&self) -> u32 {
        self.existing_labs.iter().map(|lab| lab.points).sum::<u32>()
            + self.pending_labs.iter().map(|lab| lab.points).sum::<u32>()
    }

    pub fn total_points(&self) -> u32 {
        self.lecture_points + self.test_points + self.lab_points()
    }

    /// Required: name, lecture count, lecture points, test points.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.lecture_count == 0
            || self.lecture_points == 0
            || self.test_points == 0
        {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    /// Builds the payload once every pending lab has a server id.
    ///
    /// `created_lab_ids` must be in `pending_labs` order.
    pub fn into_input(self, created_lab_ids: &[i64]) -> DisciplineInput {
        let mut labs = self.existing_labs;
        labs.extend(
            self.pending_labs
                .into_iter()
                .zip(created_lab_ids)
                .map(|(lab, id)| DisciplineLab {
                    lab_id: *id,
                    points: lab.points,
                    title: Some(lab.title),
                }),
        );
        DisciplineInput {
            name: self.name.trim().to_string(),
            description: self.description,
            lecture_count: self.lecture_count,
            lecture_points: self.lecture_points,
            test_points: self.test_points,
            test_id: self.test_id,
            lab_count: labs.len() as u32,
            labs,
            group_ids: self.group_ids,
        }
    }
}
