use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five components of a healthy breakfast tracked per student per day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Nasi,
    Lauk,
    Sayur,
    Buah,
    Minum,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Nasi,
        MenuItem::Lauk,
        MenuItem::Sayur,
        MenuItem::Buah,
        MenuItem::Minum,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "nasi" => Some(MenuItem::Nasi),
            "lauk" => Some(MenuItem::Lauk),
            "sayur" => Some(MenuItem::Sayur),
            "buah" => Some(MenuItem::Buah),
            "minum" => Some(MenuItem::Minum),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            MenuItem::Nasi => "nasi",
            MenuItem::Lauk => "lauk",
            MenuItem::Sayur => "sayur",
            MenuItem::Buah => "buah",
            MenuItem::Minum => "minum",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Nasi => "Nasi",
            MenuItem::Lauk => "Lauk",
            MenuItem::Sayur => "Sayur",
            MenuItem::Buah => "Buah",
            MenuItem::Minum => "Minum",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItems {
    pub nasi: bool,
    pub lauk: bool,
    pub sayur: bool,
    pub buah: bool,
    pub minum: bool,
}

impl MenuItems {
    pub fn all() -> Self {
        Self {
            nasi: true,
            lauk: true,
            sayur: true,
            buah: true,
            minum: true,
        }
    }

    pub fn from_items(items: &[MenuItem]) -> Self {
        let mut out = Self::default();
        for item in items {
            out.set(*item, true);
        }
        out
    }

    pub fn get(&self, item: MenuItem) -> bool {
        match item {
            MenuItem::Nasi => self.nasi,
            MenuItem::Lauk => self.lauk,
            MenuItem::Sayur => self.sayur,
            MenuItem::Buah => self.buah,
            MenuItem::Minum => self.minum,
        }
    }

    pub fn set(&mut self, item: MenuItem, value: bool) {
        match item {
            MenuItem::Nasi => self.nasi = value,
            MenuItem::Lauk => self.lauk = value,
            MenuItem::Sayur => self.sayur = value,
            MenuItem::Buah => self.buah = value,
            MenuItem::Minum => self.minum = value,
        }
    }

    /// Number of items brought (0..=5).
    pub fn count(&self) -> usize {
        MenuItem::ALL.iter().filter(|i| self.get(**i)).count()
    }
}

/// Explicit status of a daily log ("keterangan").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Keterangan {
    TidakMasuk,
    TidakMembawa,
}

impl Keterangan {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Tidak Masuk" => Some(Keterangan::TidakMasuk),
            "Tidak Membawa" => Some(Keterangan::TidakMembawa),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Keterangan::TidakMasuk => "Tidak Masuk",
            Keterangan::TidakMembawa => "Tidak Membawa",
        }
    }

    /// Lenient parser for command-line input: accepts the stored label in any
    /// case, with dashes or underscores, or the short codes `TM` / `TB`.
    pub fn from_code(code: &str) -> Option<Self> {
        let norm = code.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "tidak masuk" | "tm" | "absent" => Some(Keterangan::TidakMasuk),
            "tidak membawa" | "tb" | "not brought" => Some(Keterangan::TidakMembawa),
            _ => None,
        }
    }
}

impl fmt::Display for Keterangan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// One row submitted by the homeroom daily menu form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyLogEntry {
    pub student_id: i64,
    pub date: NaiveDate,
    pub items: MenuItems,
    pub keterangan: Option<Keterangan>,
}

impl DailyLogEntry {
    pub fn new(student_id: i64, date: NaiveDate, items: MenuItems) -> Self {
        Self {
            student_id,
            date,
            items,
            keterangan: None,
        }
    }

    pub fn with_status(mut self, keterangan: Option<Keterangan>) -> Self {
        self.keterangan = keterangan;
        self
    }
}
