// Command-line interface: server management plus a thin HTTP client

pub mod commands;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "recipes")]
#[command(about = "Recipe management service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the recipe server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Run database migrations
    Migrate,

    /// List all recipes on a running server
    List,

    /// Show a single recipe
    Show {
        /// Recipe ID
        id: Uuid,
    },

    /// Search recipes on a running server
    Search {
        /// Only vegetarian (true) or only non-vegetarian (false) recipes
        #[arg(long)]
        vegetarian: Option<bool>,

        /// Exact number of servings
        #[arg(long)]
        servings: Option<i64>,

        /// Ingredient that must be present (repeatable)
        #[arg(long = "include")]
        include: Vec<String>,

        /// Ingredient that must be absent (repeatable)
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Text to look for in the instructions
        #[arg(long)]
        text: Option<String>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: Uuid,
    },
}
