use norel_with::journey::{
    catalog, reduce, road_progress, station_index, AlertKind, MissionOutcome, NorelAction,
    NorelProvider, NorelState, NorelStore, ProfilePatch, Step,
};
use norel_with::profile::{validate_profile_form, ProfileForm};
use pretty_assertions::assert_eq;

#[test]
fn fresh_state_matches_dashboard_defaults() {
    let state = NorelState::default();
    assert!(!state.is_authenticated);
    assert_eq!(state.current_step, Step::FIRST);
    assert_eq!(state.norel_score, 750);
    assert!(!state.is_menu_open);
    assert_eq!(state.alert, None);
    assert_eq!(state.payment_info.amount, 39_800);
    assert_eq!(state.user_profile.name, "山田 太郎");
}

#[test]
fn set_step_then_read_is_always_clamped() {
    let mut store = NorelStore::new();
    for raw in -20..=20 {
        store.set_step(raw);
        let step = i64::from(store.state().current_step);
        assert!((1..=8).contains(&step));
        assert_eq!(step, raw.clamp(1, 8));
    }
}

#[test]
fn logout_from_any_step_returns_to_the_start() {
    for step in 1..=8 {
        let mut store = NorelStore::new();
        store.login();
        store.set_step(step);
        store.logout();
        assert_eq!(store.state().current_step, Step::FIRST);
        assert!(!store.state().is_authenticated);
    }
}

#[test]
fn alert_round_trip_leaves_other_fields_alone() {
    let mut store = NorelStore::new();
    store.login();
    store.set_step(4);
    let before = store.state().clone();

    store.set_alert(Some(AlertKind::License));
    store.clear_alert();
    assert_eq!(store.state(), &before);

    let mut reordered = NorelStore::with_state(before.clone());
    reordered.set_alert(Some(AlertKind::Shaken));
    reordered.set_alert(Some(AlertKind::Insurance));
    let mut direct = NorelStore::with_state(before);
    direct.set_alert(Some(AlertKind::Insurance));
    assert_eq!(reordered.state(), direct.state());
}

#[test]
fn validated_phone_change_flows_into_profile() {
    let mut store = NorelStore::new();
    let original = store.state().user_profile.clone();

    let input = ProfilePatch {
        phone: Some("080-1111-2222".to_owned()),
        ..ProfilePatch::default()
    };
    let patch = validate_profile_form(ProfileForm::Phone, &input).expect("phone is valid");
    store.update_profile(patch);

    let updated = &store.state().user_profile;
    assert_eq!(updated.phone, "080-1111-2222");
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.email, original.email);
    assert_eq!(updated.address, original.address);
    assert_eq!(updated.zip_code, original.zip_code);
    assert_eq!(updated.company, original.company);
    assert_eq!(updated.company_phone, original.company_phone);
    assert_eq!(updated.license_expiry, original.license_expiry);
    assert_eq!(updated.insurance_expiry, original.insurance_expiry);
    assert_eq!(updated.shaken_expiry, original.shaken_expiry);
}

#[test]
fn walking_the_journey_visits_every_station_in_order() {
    let mut store = NorelStore::new();
    store.login();

    let mut stations = vec![station_index(store.state().current_step)];
    while let MissionOutcome::StepAdvanced { to, .. } = store.perform_mission_action() {
        stations.push(station_index(to));
    }

    assert_eq!(stations, vec![0, 0, 1, 1, 2, 3, 4, 5]);
    assert_eq!(road_progress(store.state().current_step), 1.0);
    assert_eq!(
        store.current_step_info().button_label,
        catalog::step_info(Step::LAST).button_label
    );
}

#[test]
fn provider_fails_loudly_when_unmounted() {
    let provider = NorelProvider::new();
    let err = provider.store().expect_err("nothing mounted yet");
    assert_eq!(
        err.to_string(),
        "journey store accessed before the provider was mounted"
    );
}

#[test]
fn recorded_session_replays_to_the_same_state() {
    let actions: Vec<NorelAction> = serde_json::from_str(
        r#"[
            {"type":"LOGIN"},
            {"type":"NEXT_STEP"},
            {"type":"NEXT_STEP"},
            {"type":"TOGGLE_MENU"},
            {"type":"UPDATE_PROFILE","payload":{"company":"株式会社テスト"}},
            {"type":"CLOSE_MENU"},
            {"type":"SET_ALERT","payload":"insurance"}
        ]"#,
    )
    .expect("session parses");

    let state = actions
        .iter()
        .fold(NorelState::default(), |state, action| reduce(&state, action));

    assert!(state.is_authenticated);
    assert_eq!(state.current_step.get(), 3);
    assert!(!state.is_menu_open);
    assert_eq!(state.user_profile.company, "株式会社テスト");
    assert_eq!(state.alert, Some(AlertKind::Insurance));
}

#[test]
fn out_of_range_step_payloads_still_clamp() {
    let actions: Vec<NorelAction> = serde_json::from_str(
        r#"[
            {"type":"SET_STEP","payload":99999999999999999999},
            {"type":"NEXT_STEP"}
        ]"#,
    )
    .expect("huge integers are accepted");
    let state = actions
        .iter()
        .fold(NorelState::default(), |state, action| reduce(&state, action));
    assert_eq!(state.current_step, Step::LAST);

    let low: NorelAction =
        serde_json::from_str(r#"{"type":"SET_STEP","payload":-99999999999999999999}"#)
            .expect("huge negative accepted");
    assert_eq!(reduce(&state, &low).current_step, Step::FIRST);
}
