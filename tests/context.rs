use std::env;
use std::path::PathBuf;
use tagnav::context;
use tagnav::error::NavError;
use tagnav::model::NavigationFrame;

// All environment manipulation lives in this single test: integration
// test files run as their own process, and one #[test] is one thread,
// so nothing races on the env vars.
#[test]
fn env_fallbacks_and_missing_context() {
    unsafe {
        env::remove_var(context::ENV_CURRENT_WORD);
        env::remove_var(context::ENV_CURRENT_FILE);
        env::remove_var(context::ENV_CURRENT_LINE);
        env::remove_var(context::ENV_CURRENT_COLUMN);
    }

    // With neither flags nor environment, every required value is a
    // MissingContext report.
    assert!(matches!(
        context::resolve_term(None).unwrap_err(),
        NavError::MissingContext(_)
    ));
    let err = context::resolve_file_term(None).unwrap_err();
    assert!(matches!(&err, NavError::MissingContext(_)));
    assert!(err.to_string().contains("file name"));
    assert!(matches!(
        context::current_frame(None, None, None).unwrap_err(),
        NavError::MissingContext(_)
    ));

    unsafe {
        env::set_var(context::ENV_CURRENT_WORD, "hal_Open");
        env::set_var(context::ENV_CURRENT_FILE, "/src/hal/hal.c");
        env::set_var(context::ENV_CURRENT_LINE, "42");
        env::set_var(context::ENV_CURRENT_COLUMN, "7");
    }

    assert_eq!(context::resolve_term(None).unwrap(), "hal_Open");
    assert_eq!(context::resolve_file_term(None).unwrap(), "hal.c");
    assert_eq!(
        context::current_frame(None, None, None).unwrap(),
        NavigationFrame::new("/src/hal/hal.c", 42, 7)
    );

    // Explicit flags still win over the environment.
    assert_eq!(
        context::resolve_term(Some("memd_FlashOpen".to_string())).unwrap(),
        "memd_FlashOpen"
    );
    assert_eq!(
        context::current_frame(Some(PathBuf::from("/src/main.c")), Some(10), Some(4)).unwrap(),
        NavigationFrame::new("/src/main.c", 10, 4)
    );
}
