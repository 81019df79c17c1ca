use nvrd_core::{update, Msg, ReaderConfig, ReaderState};

#[test]
fn update_is_noop() {
    let state = ReaderState::new(ReaderConfig::default());
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
