use crate::common::FakeSvn;
use assert_fs::prelude::FileWriteStr;
use fake::Fake;
use fake::faker::lorem::en::Words;
use pretty_assertions::assert_eq;
use svn_color::areas::multiplexer::{Multiplexer, RunOutcome};
use std::ffi::OsString;
use svn_color::areas::svn::Svn;

fn svn(fake: &FakeSvn) -> Svn {
    Svn::new(Multiplexer::new(fake.program()), None, None, true)
}

fn os_strings(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[tokio::test]
async fn successful_commit_removes_the_message_file() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    let message_file = fake.child("commit-message.txt");
    message_file.write_str(&Words(3..8).fake::<Vec<String>>().join(" "))?;
    let path = message_file.path().display().to_string();

    let outcome = svn(&fake)
        .commit_extended(os_strings(&["--file", &path, "trunk"]))
        .await?;

    assert_eq!(outcome, RunOutcome::Exited(0));
    assert!(!message_file.path().exists());
    assert_eq!(fake.calls(), vec![format!("commit --file {path} trunk")]);

    Ok(())
}

#[tokio::test]
async fn failed_commit_keeps_the_message_file() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    fake.set_commit_exit_code(1)?;
    let message_file = fake.child("commit-message.txt");
    message_file.write_str(&Words(3..8).fake::<Vec<String>>().join(" "))?;
    let path = message_file.path().display().to_string();

    let outcome = svn(&fake).commit_extended(os_strings(&["-F", &path])).await?;

    assert_eq!(outcome, RunOutcome::Exited(1));
    assert!(message_file.path().exists());

    Ok(())
}

#[tokio::test]
async fn leading_non_interactive_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;

    svn(&fake)
        .commit_extended(os_strings(&["--non-interactive", "-m", "msg"]))
        .await?;

    assert_eq!(fake.calls(), vec!["commit -m msg".to_string()]);

    Ok(())
}

#[tokio::test]
async fn missing_message_file_after_success_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let fake = FakeSvn::new()?;
    let path = fake.path().join("never-written.txt").display().to_string();

    let result = svn(&fake).commit_extended(os_strings(&["-F", &path])).await;

    assert!(result.is_err());

    Ok(())
}
