use std::path::PathBuf;

use anyhow::{Result, bail};

use widgets_application::{NoticeLevel, WidgetsUseCase};
use widgets_infrastructure::JsonSnapshotFile;

use crate::display::{format_dashboard, format_notice};

/// Imports a snapshot into `session` and prints one render of it.
pub async fn run(
    usecase: &WidgetsUseCase,
    session: &str,
    import: PathBuf,
    json: bool,
) -> Result<()> {
    let pass = usecase
        .import_from(session, &JsonSnapshotFile::new(import))
        .await;

    if let Some(notice) = &pass.outcome.notice {
        eprintln!("{}", format_notice(notice));
        if notice.level == NoticeLevel::Error {
            bail!("{}", notice.message);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&pass.view)?);
    } else {
        println!("{}", format_dashboard(session, &pass.view));
    }
    Ok(())
}
