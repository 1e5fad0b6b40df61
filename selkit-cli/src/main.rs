//! selkit CLI
//!
//! Build CSS selectors, measure rectangles, and rehydrate shapes from JSON.

mod parts;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use selkit_common::warning::set_color_enabled;
use selkit_objects::{Circle, Rectangle, Shape, decode_as, encode};

/// selkit: selector builder and shape helpers
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build a compound selector
    selkit selector element=a 'attr=href$=".png"' pseudo-class=focus

    # Join compounds with combinators (' ', '+', '~', '>' or their names)
    selkit selector element=div id=main + element=table child element=tr

    # Rectangle area, or the rectangle as JSON
    selkit rect 10 20
    selkit rect 10 20 --json

    # Decode a shape and print its area
    selkit decode circle '{"radius":10}'
"#)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from <part>=<value> arguments and combinators
    Selector {
        /// Parts in order: element=, id=, class=, attr=, pseudo-class=, pseudo-element=
        #[arg(value_name = "PART", required = true, num_args = 1..)]
        parts: Vec<String>,
    },

    /// Print a rectangle's area
    Rect {
        /// Horizontal extent
        width: f64,

        /// Vertical extent
        height: f64,

        /// Print the rectangle as JSON instead of its area
        #[arg(long)]
        json: bool,
    },

    /// Decode JSON into a shape and print its area
    Decode {
        /// Shape to decode into
        #[arg(value_enum)]
        shape: ShapeKind,

        /// JSON object with the shape's fields
        json: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShapeKind {
    /// `{"width":..,"height":..}`
    Rect,
    /// `{"radius":..}`
    Circle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_color_enabled(!cli.no_color);

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if cli.no_color {
                eprintln!("error: {err:#}");
            } else {
                eprintln!("{} {err:#}", "error:".red().bold());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Selector { parts: args } => {
            let mut selector = parts::build_selector(&args)?;
            Ok(selector.stringify())
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            let rect = Rectangle::new(width, height);
            if json {
                encode(&rect).context("encoding rectangle")
            } else {
                Ok(rect.area().to_string())
            }
        }
        Command::Decode { shape, json } => {
            let area = match shape {
                ShapeKind::Rect => decode_as::<Rectangle>(&json)
                    .context("decoding rectangle")?
                    .area(),
                ShapeKind::Circle => decode_as::<Circle>(&json)
                    .context("decoding circle")?
                    .area(),
            };
            Ok(area.to_string())
        }
    }
}
