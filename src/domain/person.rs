//! Roster records: a closed set of roles plus pure display functions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Role-specific data for a roster member. The set is closed on purpose:
/// display and activity strings are plain `match` expressions over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Student {
        group: String,
        gpa: f64,
    },
    Teacher {
        subject: String,
        years_experience: u32,
    },
    DepartmentHead {
        subject: String,
        years_experience: u32,
        department: String,
    },
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student { .. } => "Student",
            Role::Teacher { .. } => "Teacher",
            Role::DepartmentHead { .. } => "Department Head",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A roster member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub role: Role,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, role: Role) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
            role,
        }
    }
}

impl Record for Person {
    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Maps a person to its display lines, most general first.
pub fn describe(person: &Person) -> Vec<String> {
    let mut lines = vec![format!("{}: {}, age {}", person.role, person.name, person.age)];
    match &person.role {
        Role::Student { group, gpa } => {
            lines.push(format!("  Group {}, GPA {:.2}", group, gpa));
        }
        Role::Teacher {
            subject,
            years_experience,
        } => {
            lines.push(format!(
                "  Subject {}, {} years of experience",
                subject, years_experience
            ));
        }
        Role::DepartmentHead {
            subject,
            years_experience,
            department,
        } => {
            lines.push(format!(
                "  Subject {}, {} years of experience",
                subject, years_experience
            ));
            lines.push(format!("  Heads the {} department", department));
        }
    }
    lines
}

/// Maps a person to a one-line activity description.
pub fn activity(person: &Person) -> String {
    match &person.role {
        Role::Student { group, .. } => format!("{} studies in group {}.", person.name, group),
        Role::Teacher { subject, .. } => format!("{} teaches {}.", person.name, subject),
        Role::DepartmentHead { department, .. } => {
            format!("{} manages the {} department.", person.name, department)
        }
    }
}
