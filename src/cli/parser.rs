use crate::export::ExportFormat;
use crate::export::template::TemplateKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rsarapan
/// Record keeping for a school breakfast program (SSB) on SQLite
#[derive(Parser)]
#[command(
    name = "rsarapan",
    version = env!("CARGO_PKG_VERSION"),
    about = "School breakfast program records: classes, students, daily menu logs, SSB attendance and monthly recaps",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, cheap password hashing)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print action results as JSON
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration, seed the admin account
    Init {
        #[arg(long, help = "Password of the seeded admin account (default: admin123)")]
        password: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in as admin
    Login {
        #[arg(long, help = "Admin username (default: from config)")]
        username: Option<String>,

        #[arg(long)]
        password: String,
    },

    /// Drop the admin session
    Logout,

    /// Manage classes (admin)
    Class {
        #[command(subcommand)]
        action: ClassCommand,
    },

    /// Manage students (admin)
    Student {
        #[command(subcommand)]
        action: StudentCommand,
    },

    /// Import classes or students from a spreadsheet export (admin)
    Import {
        #[command(subcommand)]
        action: ImportCommand,
    },

    /// Record today's breakfast menu for every student of a class
    Menu {
        /// Class id or exact class name
        class: String,

        #[arg(long, help = "Date of the log (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long = "entry",
            value_name = "ID=ITEMS",
            help = "Items brought by a student: nasi,lauk,sayur,buah,minum | all | none"
        )]
        entries: Vec<String>,

        #[arg(
            long = "status",
            value_name = "ID=STATUS",
            help = "Student status: TM = Tidak Masuk, TB = Tidak Membawa"
        )]
        statuses: Vec<String>,
    },

    /// Record SSB attendance for a class
    Ssb {
        /// Class id or exact class name
        class: String,

        #[arg(long, help = "Date of the event (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            conflicts_with = "absent",
            help = "Ids of the students present; everyone else is marked absent"
        )]
        present: Vec<i64>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Ids of the absent students; everyone else is marked present (default: all present)"
        )]
        absent: Vec<i64>,
    },

    /// Print the monthly recap (admin)
    Recap {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[arg(long)]
        year: i32,
    },

    /// Export the monthly recap (admin)
    Export {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[arg(long)]
        year: i32,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Daily overview of menu logs and attendance (admin)
    Dashboard {
        #[arg(long, help = "Date to inspect (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, help = "Restrict the item statistics to one class (id or name)")]
        class: Option<String>,
    },

    /// Read or write system settings (admin)
    Setting {
        #[command(subcommand)]
        action: SettingCommand,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

impl Commands {
    /// Commands that need a valid admin session.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Commands::Class { .. }
                | Commands::Student { .. }
                | Commands::Import { .. }
                | Commands::Recap { .. }
                | Commands::Export { .. }
                | Commands::Dashboard { .. }
                | Commands::Setting { .. }
        )
    }
}

#[derive(Subcommand)]
pub enum ClassCommand {
    /// Add a class
    Add {
        name: String,

        #[arg(long, help = "Homeroom teacher (wali kelas)")]
        teacher: Option<String>,
    },

    /// List classes with their student count
    List,

    /// Edit a class
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "New homeroom teacher; an empty value clears it")]
        teacher: Option<String>,
    },

    /// Delete classes by id (their students go with them)
    Del {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        ids: Vec<i64>,

        #[arg(long, help = "Delete every class")]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum StudentCommand {
    /// Add a student to a class
    Add {
        name: String,

        #[arg(long, help = "Class id or exact class name")]
        class: String,
    },

    /// List students
    List {
        #[arg(long, help = "Only students of this class (id or name)")]
        class: Option<String>,
    },

    /// Edit a student
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Move the student to this class (id or name)")]
        class: Option<String>,
    },

    /// Delete students by id
    Del {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        ids: Vec<i64>,

        #[arg(long, help = "Delete every student")]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum ImportCommand {
    /// Import classes (columns: Nama Kelas, Wali Kelas)
    Classes {
        #[arg(long, value_name = "FILE", help = "CSV or JSON file")]
        file: String,
    },

    /// Import students (columns: Nama Siswa, Kelas)
    Students {
        #[arg(long, value_name = "FILE", help = "CSV or JSON file")]
        file: String,
    },

    /// Write an import template
    Template {
        #[arg(value_enum)]
        kind: TemplateKind,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingCommand {
    /// Print a setting (empty when missing)
    Get { key: String },

    /// Create or update a setting
    Set { key: String, value: String },
}
