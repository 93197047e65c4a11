use clap::{Args as ClapArgs, Parser, Subcommand};

use sequence_walker::emitter::OutputFormat;
use sequence_walker::runner::{Pattern, WalkConfig};

#[derive(Parser, Debug)]
#[clap(version, about = "Walk a sequence of integers with a callable")]
pub struct Args {
    #[clap(flatten)]
    pub walk: WalkArgs,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log as JSON instead of compact text
    #[arg(long, global = true)]
    pub log_json: bool,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WalkArgs {
    /// Number of elements in the sequence
    #[arg(long, env = "WALKER_LEN", default_value_t = 5, global = true)]
    pub len: usize,

    /// Value of the first element
    #[arg(long, env = "WALKER_START", default_value_t = 0, allow_negative_numbers = true, global = true)]
    pub start: i32,

    /// How many times to walk the same sequence
    #[arg(long, default_value_t = 1, global = true)]
    pub repeat: usize,

    #[arg(long, env = "WALKER_FORMAT", value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub format: OutputFormat,
}

impl From<&WalkArgs> for WalkConfig {
    fn from(args: &WalkArgs) -> Self {
        Self {
            len: args.len,
            start: args.start,
            repeat: args.repeat,
            format: args.format,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every element
    Print,
    /// Add one to every element and print it
    Increment,
    /// Add a constant to every element and print it
    Add {
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        amount: i32,
    },
    /// Print every element, then their mean
    Mean,
    /// Run print, increment and add(2) back to back on one sequence
    Demo,
}

impl Command {
    /// `None` for the demo, which runs several patterns.
    pub fn pattern(&self) -> Option<Pattern> {
        match self {
            Command::Print => Some(Pattern::Print),
            Command::Increment => Some(Pattern::Increment),
            Command::Add { amount } => Some(Pattern::Add(*amount)),
            Command::Mean => Some(Pattern::Mean),
            Command::Demo => None,
        }
    }
}
