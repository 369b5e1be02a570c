// Entry point for the music front-end

use pawel_player::{cli::Args, launcher, logging, mode::MUSIC};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_for(&MUSIC);
    logging::init(args.verbose, args.log_file.as_deref())?;

    launcher::run(MUSIC, &args.tools()).await
}
