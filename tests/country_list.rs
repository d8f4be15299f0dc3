//! End-to-end behaviour of the country list through the public event API.

use country_list::{
    handle_event, initialize, AppState, Config, Event, FilterKind, LoadPhase, SortOrder,
};

const CATALOG: &str = r#"[
    {"name":"Tonga","region":"Oceania","area":747},
    {"name":"Lithuania","region":"Europe","area":65300},
    {"name":"Fiji","region":"Oceania","area":18272},
    {"name":"Australia","region":"Oceania","area":7692024},
    {"name":"Luxembourg","region":"Europe","area":2586},
    {"name":"Antarctica","region":"Polar"},
    {"name":"Nauru","region":"Oceania","area":21}
]"#;

fn loaded_with(body: &str) -> AppState {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::PermissionsGranted).unwrap();
    handle_event(
        &mut state,
        &Event::CatalogResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
        },
    )
    .unwrap();
    state
}

fn visible(state: &AppState) -> Vec<&str> {
    state
        .list
        .derived_view()
        .iter()
        .map(|c| c.name.as_str())
        .collect()
}

fn toggle(state: &mut AppState, kind: FilterKind) {
    handle_event(state, &Event::ToggleFilter(kind)).unwrap();
}

#[test]
fn loads_sorted_ascending() {
    let state = loaded_with(CATALOG);
    assert_eq!(
        visible(&state),
        ["Antarctica", "Australia", "Fiji", "Lithuania", "Luxembourg", "Nauru", "Tonga"]
    );
    assert_eq!(state.list.dataset().len(), 7);
}

#[test]
fn descending_reverses_the_view() {
    let mut state = loaded_with(CATALOG);
    handle_event(&mut state, &Event::ToggleSort).unwrap();
    assert_eq!(state.list.sort_order(), SortOrder::Descending);
    assert_eq!(
        visible(&state),
        ["Tonga", "Nauru", "Luxembourg", "Lithuania", "Fiji", "Australia", "Antarctica"]
    );
}

#[test]
fn smaller_than_reference_is_strict_and_skips_unknown_areas() {
    let body = r#"[
        {"name":"Tonga","region":"Oceania","area":747},
        {"name":"Lithuania","region":"Europe","area":65300},
        {"name":"Twin","region":"Europe","area":65300},
        {"name":"Antarctica","region":"Polar"}
    ]"#;
    let mut state = loaded_with(body);
    toggle(&mut state, FilterKind::SmallerThanReference);
    assert_eq!(visible(&state), ["Tonga"]);
}

#[test]
fn region_filter_keeps_oceania() {
    let mut state = loaded_with(CATALOG);
    toggle(&mut state, FilterKind::InRegion);
    assert_eq!(visible(&state), ["Australia", "Fiji", "Nauru", "Tonga"]);
}

#[test]
fn both_filters_intersect() {
    let mut state = loaded_with(CATALOG);
    toggle(&mut state, FilterKind::InRegion);
    toggle(&mut state, FilterKind::SmallerThanReference);
    assert_eq!(visible(&state), ["Fiji", "Nauru", "Tonga"]);

    handle_event(&mut state, &Event::ToggleSort).unwrap();
    assert_eq!(visible(&state), ["Tonga", "Nauru", "Fiji"]);
}

#[test]
fn missing_reference_disables_only_the_size_filter() {
    let body = r#"[
        {"name":"Tonga","region":"Oceania","area":747},
        {"name":"Fiji","region":"Oceania","area":18272},
        {"name":"France","region":"Europe","area":551695}
    ]"#;
    let mut state = loaded_with(body);
    toggle(&mut state, FilterKind::SmallerThanReference);
    assert_eq!(visible(&state), ["Fiji", "France", "Tonga"]);

    toggle(&mut state, FilterKind::InRegion);
    assert_eq!(visible(&state), ["Fiji", "Tonga"]);
}

#[test]
fn sort_ignores_case() {
    let body = r#"[
        {"name":"bhutan","region":"Asia","area":38394},
        {"name":"Albania","region":"Europe","area":28748},
        {"name":"CHAD","region":"Africa","area":1284000}
    ]"#;
    let state = loaded_with(body);
    assert_eq!(visible(&state), ["Albania", "bhutan", "CHAD"]);
}

#[test]
fn toggling_twice_restores_the_view() {
    let mut state = loaded_with(CATALOG);
    let before: Vec<String> = visible(&state).into_iter().map(String::from).collect();

    for kind in [FilterKind::SmallerThanReference, FilterKind::InRegion] {
        toggle(&mut state, kind);
        toggle(&mut state, kind);
    }
    handle_event(&mut state, &Event::ToggleSort).unwrap();
    handle_event(&mut state, &Event::ToggleSort).unwrap();

    assert_eq!(visible(&state), before);
}

#[test]
fn every_combination_is_a_subset_of_the_dataset() {
    for mask in 0..8u8 {
        let mut state = loaded_with(CATALOG);
        if mask & 1 != 0 {
            toggle(&mut state, FilterKind::SmallerThanReference);
        }
        if mask & 2 != 0 {
            toggle(&mut state, FilterKind::InRegion);
        }
        if mask & 4 != 0 {
            handle_event(&mut state, &Event::ToggleSort).unwrap();
        }

        let view = state.list.derived_view();
        assert!(view.len() <= state.list.dataset().len());
        assert!(view.iter().all(|c| state.list.dataset().contains(c)));

        let keys: Vec<String> = view.iter().map(|c| c.name.to_uppercase()).collect();
        let ordered = keys.windows(2).all(|w| {
            if mask & 4 == 0 {
                w[0] <= w[1]
            } else {
                w[0] >= w[1]
            }
        });
        assert!(ordered, "mask {mask}: {keys:?}");
    }
}

#[test]
fn failed_fetch_leaves_an_empty_list() {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::PermissionsGranted).unwrap();
    let result = handle_event(
        &mut state,
        &Event::CatalogResponse {
            status: 200,
            body: b"<html>not json</html>".to_vec(),
        },
    );

    assert!(result.is_ok());
    assert_eq!(state.phase, LoadPhase::Settled);
    assert!(state.list.dataset().is_empty());

    toggle(&mut state, FilterKind::InRegion);
    handle_event(&mut state, &Event::ToggleSort).unwrap();
    assert!(state.list.derived_view().is_empty());
}

#[test]
fn configured_criteria_drive_the_filters() {
    let config = Config {
        reference_country: "Fiji".to_string(),
        target_region: "Europe".to_string(),
        ..Config::default()
    };
    let mut state = initialize(&config);
    handle_event(&mut state, &Event::PermissionsGranted).unwrap();
    handle_event(
        &mut state,
        &Event::CatalogResponse {
            status: 200,
            body: CATALOG.as_bytes().to_vec(),
        },
    )
    .unwrap();

    toggle(&mut state, FilterKind::SmallerThanReference);
    assert_eq!(visible(&state), ["Luxembourg", "Nauru", "Tonga"]);

    toggle(&mut state, FilterKind::InRegion);
    assert_eq!(visible(&state), ["Luxembourg"]);
}

#[test]
fn view_model_reflects_filters() {
    let mut state = loaded_with(CATALOG);
    toggle(&mut state, FilterKind::InRegion);

    let vm = state.compute_viewmodel(40, 100);
    assert_eq!(vm.header.title, " Countries (4 of 7) ");
    assert_eq!(vm.display_items.len(), 4);
    assert!(vm.display_items[0].is_selected);
    assert!(vm.controls.filters.iter().any(|f| f.key == '2' && f.active));
    assert!(vm.empty_state.is_none());
}
