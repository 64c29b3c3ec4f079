use clap::Args;
use std::path::PathBuf;

use coursedrip_core::{ContentFixture, DripConfig, QuizDripFilter, ScheduleAccessControl};

#[derive(Args)]
pub struct MessageArgs {
    /// Content fixture (JSON)
    pub fixture: PathBuf,
    /// Quiz to preview the message for
    pub quiz: u64,
    /// User requesting the content
    #[arg(long, default_value_t = 0)]
    pub user: u64,
    /// Evaluate at this time (RFC 3339 or YYYY-MM-DD) instead of now
    #[arg(long)]
    pub at: Option<String>,
}

pub fn run(args: MessageArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ContentFixture::from_json_file(&args.fixture)?;
    let (store, enrollments) = fixture.into_parts();
    let now = super::parse_at(args.at.as_deref())?;

    let config = DripConfig::load();
    let access = ScheduleAccessControl::new(&store, enrollments, args.user, now);
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(args.user));

    let message = filter.drip_message(Some(args.quiz));
    if message.is_empty() {
        eprintln!("no drip message for quiz {}", args.quiz);
        std::process::exit(1);
    }
    println!("{message}");
    Ok(())
}
