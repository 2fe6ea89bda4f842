use clap_markdown::help_markdown;

use tznow::cli::Cli;

fn main() {
    // Print header
    println!("# tznow CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `tznow` command-line interface.");
    println!();

    // Generate and print the markdown using the type parameter
    println!("{}", help_markdown::<Cli>());
}
