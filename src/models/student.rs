use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub class_id: i64,
    pub class_name: String, // joined from classes.name
}
