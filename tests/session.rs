use rand::SeedableRng;
use rand::rngs::StdRng;
use weekpick::output::NO_TICKETS_MESSAGE;
use weekpick::session::{HELP, Reply, Session};
use weekpick_lotto::BatchOptions;
use weekpick_mealplan::{EMPTY_INPUT_MESSAGE, RESET_MESSAGE, catalog};

fn session() -> Session<StdRng> {
    Session::new(
        catalog::builtin(),
        BatchOptions::default(),
        StdRng::seed_from_u64(21),
    )
}

fn shown(reply: Reply) -> String {
    match reply {
        Reply::Show(text) => text,
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_plan_command_renders_five_days() -> anyhow::Result<()> {
    let mut session = session();

    let text = shown(session.handle("plan 김치, 밥, 달걀")?);

    assert!(text.starts_with("월요일 · 김치볶음밥"));
    assert_eq!(session.plan().plan().len(), 5);

    Ok(())
}

#[test]
fn test_plan_command_without_ingredients() -> anyhow::Result<()> {
    let mut session = session();

    assert_eq!(shown(session.handle("plan")?), EMPTY_INPUT_MESSAGE);
    assert_eq!(session.handle("copy")?, Reply::Copy(None));

    Ok(())
}

#[test]
fn test_lotto_again_and_copy() -> anyhow::Result<()> {
    let mut session = session();

    let first = shown(session.handle("lotto 3")?);
    assert_eq!(first.lines().count(), 3);

    let again = shown(session.handle("again")?);
    assert_eq!(again.lines().count(), 3);
    assert_ne!(first, again);

    match session.handle("copy")? {
        Reply::Copy(Some(text)) => assert_eq!(text, again),
        other => panic!("expected copy block, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_lotto_count_is_clamped() -> anyhow::Result<()> {
    let mut session = session();

    shown(session.handle("lotto 50")?);
    assert_eq!(session.batch().tickets().len(), 10);

    assert!(shown(session.handle("lotto many")?).starts_with("invalid count"));

    Ok(())
}

#[test]
fn test_copy_follows_last_tool_used() -> anyhow::Result<()> {
    let mut session = session();

    session.handle("lotto 2")?;
    session.handle("plan 두부")?;

    match session.handle("copy")? {
        Reply::Copy(Some(text)) => assert!(text.contains(" | 부족: ")),
        other => panic!("expected plan copy block, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_reset_clears_state() -> anyhow::Result<()> {
    let mut session = session();

    session.handle("plan 김")?;
    session.handle("lotto")?;

    assert_eq!(shown(session.handle("reset lotto")?), NO_TICKETS_MESSAGE);
    assert!(session.batch().tickets().is_empty());
    assert_eq!(session.plan().plan().len(), 5);

    assert_eq!(shown(session.handle("reset")?), RESET_MESSAGE);
    assert!(session.plan().plan().is_empty());

    Ok(())
}

#[test]
fn test_help_and_quit() -> anyhow::Result<()> {
    let mut session = session();

    assert_eq!(shown(session.handle("help")?), HELP);
    assert!(shown(session.handle("dance")?).starts_with("unknown command: dance"));
    assert_eq!(session.handle("  quit ")?, Reply::Quit);

    Ok(())
}

#[test]
fn test_command_splits_on_any_whitespace() -> anyhow::Result<()> {
    let mut session = session();

    let text = shown(session.handle("plan\t김치, 밥, 달걀")?);
    assert!(text.starts_with("월요일 · 김치볶음밥"));
    assert_eq!(session.plan().plan().len(), 5);

    assert_eq!(shown(session.handle("lotto\t2")?).lines().count(), 2);
    assert_eq!(session.batch().tickets().len(), 2);

    Ok(())
}
