use crate::common::{self, FakeSvn};
use pretty_assertions::assert_eq;
use rstest::rstest;
use svn_color::areas::multiplexer::{Multiplexer, RunOutcome};
use svn_color::areas::svn::Svn;
use std::ffi::OsString;
use svn_color::artifacts::core::sink::CaptureBuffer;

fn plain_svn(fake: &FakeSvn, out: &CaptureBuffer, err: &CaptureBuffer) -> Svn {
    Svn::new(
        Multiplexer::new(fake.program()),
        Some(out.sink()),
        Some(err.sink()),
        false,
    )
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

fn os_strings(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[rstest]
#[case(10, 15, "log -v -r 11:15")]
#[case(15, 10, "log -v -r 10:14")]
#[case(14, 15, "log -v -r 15:15")]
#[tokio::test]
async fn log_covers_the_revisions_crossed(
    #[case] before: u64,
    #[case] after: u64,
    #[case] expected_log: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    fake.set_revision(before)?;
    fake.set_next_revision(after)?;
    let out = CaptureBuffer::default();
    let err = CaptureBuffer::default();

    let outcome = plain_svn(&fake, &out, &err).update_verbose(&[]).await?;

    assert_eq!(outcome, RunOutcome::Exited(0));
    assert_eq!(fake.calls(), strings(&["info", "update", "info", expected_log]));
    assert!(out.contents().starts_with("U    main.c\n"));
    assert!(out.contents().contains(common::LOG_SEPARATOR));

    Ok(())
}

#[tokio::test]
async fn unchanged_revision_reports_no_changes() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    fake.set_revision(12)?;
    let out = CaptureBuffer::default();
    let err = CaptureBuffer::default();

    plain_svn(&fake, &out, &err).update_verbose(&[]).await?;

    assert_eq!(out.contents(), "At revision 12.\nNo changes.\n");
    assert_eq!(fake.calls(), strings(&["info", "update", "info"]));

    Ok(())
}

#[tokio::test]
async fn failed_revision_lookup_skips_the_log() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    let out = CaptureBuffer::default();
    let err = CaptureBuffer::default();

    let outcome = plain_svn(&fake, &out, &err).update_verbose(&[]).await?;

    assert_eq!(outcome, RunOutcome::Exited(0));
    assert_eq!(fake.calls(), strings(&["info", "update", "info"]));
    assert!(!out.contents().contains("No changes."));
    // info errors are swallowed
    assert!(err.is_empty());

    Ok(())
}

#[tokio::test]
async fn revision_override_is_dropped_from_every_step() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    fake.set_revision(10)?;
    fake.set_next_revision(12)?;
    let out = CaptureBuffer::default();
    let err = CaptureBuffer::default();

    plain_svn(&fake, &out, &err)
        .update_verbose(&os_strings(&["-r", "12", "trunk"]))
        .await?;

    assert_eq!(
        fake.calls(),
        strings(&["info trunk", "update trunk", "info trunk", "log -v -r 11:12 trunk"])
    );

    Ok(())
}
