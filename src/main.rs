use clap::{Parser as ClapParser, Subcommand};
use lucene2sql::cli::{self, CliError, TranslateOptions, TranslateOutput};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "lucene2sql")]
#[command(about = "Translate Lucene query_string expressions into SQL WHERE-clause predicates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a query into a SQL predicate
    Translate {
        /// The Lucene query to translate (reads from stdin if not provided)
        query: Option<String>,

        /// Default field(s) searched when a term has no field: prefix
        #[arg(short, long, default_values_t = [String::from("title"), String::from("text")])]
        field: Vec<String>,

        /// JSON file mapping logical field names to internal property names
        #[arg(long)]
        schema: Option<String>,

        /// JSON file of column aliases applied to the finished predicate
        #[arg(long)]
        aliases: Option<String>,

        /// Print the referenced columns instead of SQL
        #[arg(long)]
        columns: bool,

        /// Print the token stream instead of SQL
        #[arg(long)]
        tokens: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate {
            query,
            field,
            schema,
            aliases,
            columns,
            tokens,
        } => run_translate(query, field, schema, aliases, columns, tokens),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(
    query: Option<String>,
    fields: Vec<String>,
    schema: Option<String>,
    aliases: Option<String>,
    columns: bool,
    tokens: bool,
) -> Result<(), CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer.trim_end().to_string()
        }
        None => return Err(CliError::NoQuery),
    };

    let options = TranslateOptions {
        query,
        fields,
        schema_path: schema,
        alias_path: aliases,
        columns,
        tokens,
    };

    match cli::execute_translate(&options)? {
        TranslateOutput::Sql(sql) => println!("{}", sql),
        TranslateOutput::Columns(columns) => {
            for column in columns {
                println!("{}", column);
            }
        }
        TranslateOutput::Tokens(tokens) => {
            for token in tokens {
                println!("{:?}", token);
            }
        }
    }
    Ok(())
}
