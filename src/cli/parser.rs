use crate::export::ExportFormat;
use crate::models::user::Role;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tallysheet
/// CLI application to track timesheets and billable amounts with SQLite
#[derive(Parser)]
#[command(
    name = "tallysheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A multi-user timesheet CLI: log work entries, compute billable amounts, and review dashboards using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration (seeds the admin account)
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Rewrite the configuration file with defaults for missing fields")]
        migrate: bool,
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log in as a user; later commands run with this identity
    Login {
        #[arg(long, help = "Username")]
        username: String,

        #[arg(long, help = "Password")]
        password: String,
    },

    /// Remove the current session
    Logout,

    /// Change the logged-in user's own password
    Passwd {
        #[arg(long = "old", help = "Current password")]
        old: String,

        #[arg(long = "new", help = "New password")]
        new: String,
    },

    /// Manage users (admin only)
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage companies (admin only)
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Add a timesheet entry for the logged-in user
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Task description")]
        task: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: String,

        #[arg(long = "break", help = "Break duration in minutes")]
        break_minutes: Option<u32>,

        #[arg(long, help = "Mark the entry as billable")]
        billable: bool,

        #[arg(long = "rate", help = "Hourly rate")]
        rate: Option<f64>,

        #[arg(long = "company", help = "Company id to bill against")]
        company: Option<i64>,
    },

    /// List timesheet entries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Filter by username (admin only)")]
        user: Option<String>,

        #[arg(long, help = "Filter by status (pending/approved/rejected)")]
        status: Option<String>,

        #[arg(long = "mine", help = "Show only the logged-in user's entries")]
        mine: bool,
    },

    /// Edit an existing timesheet entry
    Edit {
        #[arg(long, help = "Entry id to edit")]
        id: i64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New task description")]
        task: Option<String>,

        #[arg(long = "start", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "break", help = "New break duration in minutes")]
        break_minutes: Option<u32>,

        #[arg(long = "rate", help = "New hourly rate")]
        rate: Option<f64>,
    },

    /// Delete a timesheet entry (and its comments)
    Del {
        #[arg(long, help = "Entry id to delete")]
        id: i64,
    },

    /// Approve or reject a timesheet entry (admin only)
    Approve {
        #[arg(long, help = "Entry id")]
        id: i64,

        #[arg(long, help = "Reject instead of approve")]
        reject: bool,

        #[arg(long, help = "Optional note stored as an admin comment")]
        note: Option<String>,
    },

    /// Comment on timesheet entries
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Show KPIs, per-user hours, billable split, and the six-month trend
    Dashboard,

    /// Show a month calendar of entry activity
    Calendar {
        #[arg(long, help = "Month to show (YYYY-MM, default current)")]
        month: Option<String>,

        #[arg(long, help = "Filter by username")]
        user: Option<String>,

        #[arg(long, help = "Show the entries of one day (YYYY-MM-DD)")]
        day: Option<String>,
    },

    /// Export timesheet entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a new user
    Create {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long, value_enum, default_value = "operator")]
        role: Role,

        #[arg(long = "company", help = "Company id (optional)")]
        company: Option<i64>,
    },

    /// List all users
    List,

    /// Edit a user (username, role, company, active flag)
    Edit {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        username: Option<String>,

        #[arg(long, value_enum)]
        role: Option<Role>,

        #[arg(long = "company")]
        company: Option<i64>,

        #[arg(long, help = "Activate the account")]
        activate: bool,

        #[arg(long, help = "Deactivate the account", conflicts_with = "activate")]
        deactivate: bool,
    },

    /// Set a new password without knowing the old one
    ResetPassword {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        password: String,
    },

    /// Delete a user and their timesheets
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CompanyAction {
    /// Register a new company
    Add {
        #[arg(long)]
        name: String,
    },

    /// List all companies
    List,
}

#[derive(Subcommand)]
pub enum CommentAction {
    /// Add a comment to an entry
    Add {
        #[arg(long = "entry", help = "Entry id")]
        entry: i64,

        #[arg(long)]
        text: String,
    },

    /// List the comments of an entry, oldest first
    List {
        #[arg(long = "entry", help = "Entry id")]
        entry: i64,
    },
}
