// Entry point for the video front-end

use pawel_player::{cli::Args, launcher, logging, mode::VIDEO};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_for(&VIDEO);
    logging::init(args.verbose, args.log_file.as_deref())?;

    launcher::run(VIDEO, &args.tools()).await
}
