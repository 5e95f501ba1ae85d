use crate::{AppError, Role};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Textarea,
}

/// One entry in a role's profile-completion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileField {
    /// Column name sent to the profile store.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Heading the field is grouped under.
    pub section: &'static str,
}

const fn input(key: &'static str, label: &'static str, section: &'static str) -> ProfileField {
    ProfileField {
        key,
        label,
        kind: FieldKind::Input,
        section,
    }
}

const fn textarea(key: &'static str, label: &'static str, section: &'static str) -> ProfileField {
    ProfileField {
        key,
        label,
        kind: FieldKind::Textarea,
        section,
    }
}

const STUDENT_FIELDS: &[ProfileField] = &[
    input("full_name", "Full Name", "Student Information"),
    input("institution", "College / University", "Student Information"),
    input("course", "Course / Degree", "Student Information"),
    input("year", "Year / Semester", "Student Information"),
    textarea("interests", "Areas of Interest", "Academic Interests"),
    textarea("skills", "Skills", "Academic Interests"),
];

const TEACHER_FIELDS: &[ProfileField] = &[
    input("institution", "Institution", "Teacher Profile"),
    input("subjects", "Subjects Taught", "Teacher Profile"),
    input("years_experience", "Years of Experience", "Teacher Profile"),
    input("affiliation", "Affiliated Board / University", "Teacher Profile"),
    textarea("teaching_philosophy", "Teaching Philosophy", "Teaching Practice"),
    textarea("certifications", "Certifications & Training", "Teaching Practice"),
];

const RESEARCHER_FIELDS: &[ProfileField] = &[
    input("institution", "Institution", "Research Identity"),
    input("department", "Department / Lab", "Research Identity"),
    input("orcid_id", "ORCID ID", "Research Identity"),
    input("publication_count", "Total Publications", "Research Metrics"),
    input("citation_count", "Total Citations", "Research Metrics"),
    input("h_index", "h-index", "Research Metrics"),
    textarea("research_domains", "Research Domains & Keywords", "Research Focus"),
];

const MENTOR_FIELDS: &[ProfileField] = &[
    input("affiliation", "Current Affiliation", "Mentor Profile"),
    input("mentorship_role", "Mentorship Role", "Mentor Profile"),
    input("students_mentored", "Students Mentored", "Mentor Profile"),
    input("active_mentees", "Active Mentees", "Mentor Profile"),
    textarea("mentorship_areas", "Mentorship Areas", "Mentoring Practice"),
    textarea("availability", "Availability & Expectations", "Mentoring Practice"),
];

/// Ordered field list for a role.
pub fn fields_for(role: Role) -> &'static [ProfileField] {
    match role {
        Role::Student => STUDENT_FIELDS,
        Role::Teacher => TEACHER_FIELDS,
        Role::Researcher => RESEARCHER_FIELDS,
        Role::Mentor => MENTOR_FIELDS,
    }
}

/// Values typed into the profile modal. Lives only while the modal is open.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFormState {
    role: Role,
    values: Vec<String>,
}

impl ProfileFormState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            values: vec![String::new(); fields_for(role).len()],
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn fields(&self) -> &'static [ProfileField] {
        fields_for(self.role)
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index_of(key).map(|i| self.values[i].as_str())
    }

    /// Set a field value. Keys outside the role's table are rejected.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), AppError> {
        let index = self.index_of(key).ok_or_else(|| {
            AppError::validation(format!("{key} is not a {} profile field", self.role))
        })?;
        self.values[index] = value.into();
        Ok(())
    }

    /// `(field, value)` pairs in table order.
    pub fn values(&self) -> impl Iterator<Item = (&'static ProfileField, &str)> {
        self.fields()
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.trim().is_empty())
    }

    /// JSON object of the non-blank, trimmed values, ready for the profile store.
    pub fn to_update(&self) -> Map<String, Value> {
        self.values()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(f, v)| (f.key.to_string(), Value::String(v.trim().to_string())))
            .collect()
    }
}
