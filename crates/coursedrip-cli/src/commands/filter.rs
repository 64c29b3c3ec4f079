use clap::Args;
use std::path::PathBuf;

use coursedrip_core::{ContentFixture, DripConfig, QuizDripFilter, ScheduleAccessControl};

#[derive(Args)]
pub struct FilterArgs {
    /// Content fixture (JSON)
    pub fixture: PathBuf,
    /// User requesting the content
    #[arg(long, default_value_t = 0)]
    pub user: u64,
    /// Evaluate at this time (RFC 3339 or YYYY-MM-DD) instead of now
    #[arg(long)]
    pub at: Option<String>,
    /// Treat the request as an administrative context
    #[arg(long)]
    pub admin: bool,
}

pub fn run(args: FilterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ContentFixture::from_json_file(&args.fixture)?;
    let (store, enrollments) = fixture.into_parts();
    let now = super::parse_at(args.at.as_deref())?;

    let config = DripConfig::load();
    let access = ScheduleAccessControl::new(&store, enrollments, args.user, now);
    let mut ctx = config.request_context(args.user);
    ctx.is_admin = args.admin;

    let filter = QuizDripFilter::new(&config, &store, &access, ctx);
    let filtered = filter.filter(store.posts());
    println!("{}", serde_json::to_string_pretty(&filtered)?);
    Ok(())
}
