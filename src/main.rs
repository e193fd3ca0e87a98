use anyhow::Result;
use std::io;
use std::path::Path;
use wardrobe_sqlgen::{
    cli::{Cli, Commands},
    dict::ALL_CATEGORIES,
    filter::resolve_tables,
    schema::ALL_TABLES,
    writer::{write_dict_script, write_schema_script, DEFAULT_DATABASE, DICT_OUTPUT, SCHEMA_OUTPUT},
    Catalog,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Dict { output, quiet }) => {
            let rows = write_dict_script(ALL_CATEGORIES, &output, quiet, &mut stdout)?;
            log::info!("Generated {} dictionary rows", rows);
        }

        Some(Commands::Schema {
            output,
            quiet,
            database,
            include,
            exclude,
        }) => {
            let tables = resolve_tables(include, exclude)?;
            let count = write_schema_script(&tables, &database, &output, quiet, &mut stdout)?;
            log::info!("Generated {} tables", count);
        }

        Some(Commands::List { json }) => {
            if json {
                println!("{}", Catalog::new().to_json()?);
            } else {
                println!("Tables:\n");
                for table in ALL_TABLES {
                    println!("  {:32} {}", table.name, table.comment);
                }
                println!("\nDictionary categories:\n");
                for category in ALL_CATEGORIES {
                    println!(
                        "  {:32} {} ({} items)",
                        category.type_code,
                        category.type_name,
                        category.items.len()
                    );
                }
            }
        }

        None => {
            let count = write_schema_script(
                ALL_TABLES,
                DEFAULT_DATABASE,
                Path::new(SCHEMA_OUTPUT),
                false,
                &mut stdout,
            )?;
            let rows = write_dict_script(ALL_CATEGORIES, Path::new(DICT_OUTPUT), false, &mut stdout)?;
            log::info!("Generated {} tables and {} dictionary rows", count, rows);
        }
    }

    Ok(())
}
