//! End-to-end tests for the editing protocol
//!
//! Exercises full editor flows against the built-in presets: open, edit
//! through drag and typed input, reset, save/cancel, and re-render the
//! composite card against the saved result.

use dealscore_core::{presets, VariableId};
use dealscore_engine::{
    composite_score, read_control, Bound, ControlValue, EditSession, EditorState, InputOutcome,
};

#[test]
fn test_edit_save_rerender_cycle() {
    // open an editor over the saved config
    let mut session = EditSession::open(presets::balanced());

    // raise the Fair/Good boundary from 600 to 625 via typed input
    session
        .begin_edit(VariableId::CreditScore, 1, Bound::Max)
        .unwrap();
    assert_eq!(session.input_changed("625"), InputOutcome::Committed(625.0));
    session.blur();

    // save hands the working copy back as the new config
    let saved = session.save();
    saved.validate().unwrap();
    let tiers = saved.credit_score.kind.tiers().unwrap();
    assert_eq!(tiers[1].max, Some(625.0));
    assert_eq!(tiers[2].min, Some(625.0));

    // the card re-renders against the saved config: a 610 score now
    // resolves to the Fair tier label, while points still come from the
    // hardcoded calculator buckets
    let reading = read_control(&saved, &ControlValue::new(VariableId::CreditScore, "610"));
    assert_eq!(reading.label.as_deref(), Some("Fair"));
    assert_eq!(reading.points, 3);
}

#[test]
fn test_drag_session_full_cycle() {
    let mut session = EditSession::open(presets::balanced());

    session.begin_drag(VariableId::Wh, 1).unwrap();
    // every move tick commits; the ladder stays valid throughout
    for position in [10.0, 25.0, 40.0, 55.0, 70.0] {
        session.drag_to(position).unwrap();
        session.working().validate().unwrap();
    }
    session.end_drag();
    assert_eq!(*session.state(), EditorState::Idle);

    let saved = session.save();
    saved.validate().unwrap();
    let tiers = saved.wh.kind.tiers().unwrap();
    assert_eq!(tiers[1].max, tiers[2].min);
}

#[test]
fn test_abandoned_session_leaves_saved_config_untouched() {
    let baseline = presets::conservative();
    let mut session = EditSession::open(baseline.clone());

    session.begin_drag(VariableId::Tib, 2).unwrap();
    session.drag_to(80.0).unwrap();
    session.end_drag();
    session
        .set_category_points(VariableId::Seasonality, "low", 0)
        .unwrap();

    assert_eq!(session.cancel(), baseline);
}

#[test]
fn test_reset_one_variable_mid_session() {
    let mut session = EditSession::open(presets::lenient());

    session.begin_edit(VariableId::Tib, 1, Bound::Max).unwrap();
    session.input_changed("2.5");
    session.blur();
    session
        .set_category_points(VariableId::Seasonality, "high", 4)
        .unwrap();

    session.reset_variable(VariableId::Tib);
    let saved = session.save();

    assert_eq!(saved.tib, presets::balanced().tib);
    let high = saved
        .seasonality
        .kind
        .categories()
        .unwrap()
        .iter()
        .find(|c| c.id == "high")
        .unwrap();
    assert_eq!(high.points, 4);
}

#[test]
fn test_composite_card_against_each_preset() {
    let controls = vec![
        ControlValue::new(VariableId::Tib, "5"),
        ControlValue::new(VariableId::Seasonality, "Moderate"),
        ControlValue::new(VariableId::Wh, "8"),
        ControlValue::new(VariableId::CreditScore, "680"),
        ControlValue::new(VariableId::Ue, "3.5"),
    ];

    // calculators are hardcoded, so the breakdown is identical across
    // presets; only resolved labels differ
    for config in [
        presets::balanced(),
        presets::conservative(),
        presets::lenient(),
    ] {
        let composite = composite_score(&config, &controls);
        assert_eq!(composite.total_points, 3 + 2 + 3 + 4 + 3);
        assert_eq!(composite.max_points, 25);
        assert_eq!(composite.grade, 'B');
    }
}
