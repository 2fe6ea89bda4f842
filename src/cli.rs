use clap::Parser;

/// Print the current local date, time, timezone name, and UTC offset
///
/// Takes no arguments: the output always reflects the host's clock and
/// configured timezone at the moment of invocation.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {}
