use clap::Args;
use std::path::PathBuf;

use coursedrip_core::{ContentFixture, DripConfig, QuizDripFilter, ScheduleAccessControl};

#[derive(Args)]
pub struct DripTypeArgs {
    /// Content fixture (JSON)
    pub fixture: PathBuf,
    /// Quiz to inspect
    pub quiz: u64,
}

pub fn run(args: DripTypeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ContentFixture::from_json_file(&args.fixture)?;
    let (store, enrollments) = fixture.into_parts();

    let config = DripConfig::load();
    let access = ScheduleAccessControl::new(&store, enrollments, 0, chrono::Utc::now());
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(0));

    println!("{}", filter.drip_type(args.quiz).as_str());
    Ok(())
}
