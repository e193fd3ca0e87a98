use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::writer::{DEFAULT_DATABASE, DICT_OUTPUT, SCHEMA_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "wardrobe-sqlgen")]
#[command(version, about = "Generate wardrobe schema DDL and dictionary seed SQL")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a command, both scripts are generated with default settings
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate INSERT statements seeding the dictionary table
    Dict {
        /// Output SQL file path
        #[arg(short, long, default_value = DICT_OUTPUT)]
        output: PathBuf,

        /// Don't echo the SQL to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate CREATE TABLE statements for the application schema
    Schema {
        /// Output SQL file path
        #[arg(short, long, default_value = SCHEMA_OUTPUT)]
        output: PathBuf,

        /// Don't echo the SQL to stdout
        #[arg(short, long)]
        quiet: bool,

        /// Database name shown in table header comments
        #[arg(short, long, default_value = DEFAULT_DATABASE)]
        database: String,

        /// Only include these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Option<Vec<String>>,

        /// Exclude these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,
    },

    /// List all tables and dictionary categories
    List {
        /// Dump the full catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
