use anyhow;
use tracing::debug;

use crate::cli;
use crate::plot;

pub fn cmd(args: cli::Arguments) -> Result<(), anyhow::Error> {
    match args.cmd {
        cli::SubCommand::Plot(options) => {
            debug!("plot options {:?}", options);
            plot::plot(&options)
        }
    }
}
