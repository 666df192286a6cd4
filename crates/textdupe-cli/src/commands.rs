use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "textdupe", version)]
#[command(
    about = "Compares files or directories with the Levenshtein distance algorithm \
             to aide the detection of plagiarism",
    long_about = None
)]
pub struct Cli {
    /// Files or directories to compare
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Do not ignore whitespaces (spaces and newlines) when comparing
    #[arg(short = 'i', long)]
    pub keep_whitespace: bool,

    /// Do not descend into subdirectories
    #[arg(short = 'r', long)]
    pub no_recursive: bool,

    /// Print a trace line for every pair as it is computed
    #[arg(short = 'e', long)]
    pub verbose: bool,
}
