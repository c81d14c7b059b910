use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Class {
    pub id: i64,
    pub name: String,          // ⇔ classes.name (UNIQUE)
    pub homeroom_teacher: Option<String>,
}

/// A class together with how many students belong to it.
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub class: Class,
    pub student_count: i64,
}

impl Class {
    pub fn teacher_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.homeroom_teacher.as_deref().unwrap_or(fallback)
    }
}

/// Empty or whitespace-only teacher names are stored as NULL.
pub fn normalize_teacher(teacher: Option<&str>) -> Option<String> {
    teacher
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
