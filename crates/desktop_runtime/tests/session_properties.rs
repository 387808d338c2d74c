use std::collections::{BTreeMap, BTreeSet};

use desktop_app_contract::ApplicationId;
use desktop_runtime::{
    AppCatalog, DesktopAction, DesktopConfig, PointerTarget, Position, WindowManager,
};
use proptest::prelude::*;

const APP_IDS: [&str; 5] = [
    "system.finder",
    "system.browser",
    "system.terminal",
    "system.settings",
    "system.music",
];
const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
enum Step {
    Launch(usize),
    Close(usize),
    Focus(usize),
    Minimize(usize),
    Unminimize(usize),
    ToggleFullScreen(usize),
    Drag(usize, f64, f64),
    Resize(f64, f64),
}

fn step() -> impl Strategy<Value = Step> {
    let app = 0..APP_IDS.len();
    prop_oneof![
        3 => app.clone().prop_map(Step::Launch),
        1 => app.clone().prop_map(Step::Close),
        2 => app.clone().prop_map(Step::Focus),
        1 => app.clone().prop_map(Step::Minimize),
        1 => app.clone().prop_map(Step::Unminimize),
        1 => app.clone().prop_map(Step::ToggleFullScreen),
        2 => (app, -1500.0..2500.0f64, -1500.0..2500.0f64)
            .prop_map(|(index, x, y)| Step::Drag(index, x, y)),
        1 => (300.0..2000.0f64, 300.0..1400.0f64).prop_map(|(w, h)| Step::Resize(w, h)),
    ]
}

fn app(index: usize) -> ApplicationId {
    ApplicationId::trusted(APP_IDS[index])
}

fn manager() -> WindowManager {
    let mut config = DesktopConfig::default();
    config.initial_viewport.width = 1000.0;
    config.initial_viewport.height = 800.0;
    WindowManager::new(AppCatalog::builtin().expect("builtin catalog"), &config)
}

fn apply(wm: &mut WindowManager, step: &Step) {
    let action = match step {
        Step::Launch(index) => DesktopAction::Launch { app_id: app(*index) },
        Step::Close(index) => DesktopAction::Close {
            window_id: app(*index),
        },
        Step::Focus(index) => DesktopAction::Focus {
            window_id: app(*index),
        },
        Step::Minimize(index) => DesktopAction::Minimize {
            window_id: app(*index),
        },
        Step::Unminimize(index) => DesktopAction::Unminimize {
            window_id: app(*index),
        },
        Step::ToggleFullScreen(index) => DesktopAction::ToggleFullScreen {
            window_id: app(*index),
        },
        Step::Drag(index, x, y) => {
            let window_id = app(*index);
            let Some(origin) = wm.session().window(&window_id).map(|w| w.position) else {
                return;
            };
            wm.dispatch(DesktopAction::PointerDown {
                target: PointerTarget::TitleBar(window_id),
                pointer: Position::new(origin.x + 12.0, origin.y + 8.0),
            });
            wm.dispatch(DesktopAction::PointerMove {
                pointer: Position::new(*x, *y),
            });
            DesktopAction::PointerUp
        }
        Step::Resize(width, height) => DesktopAction::ViewportResized {
            width: *width,
            height: *height,
        },
    };
    wm.dispatch(action);
}

fn assert_invariants(wm: &WindowManager) -> Result<(), TestCaseError> {
    let session = wm.session();
    let viewport = session.viewport;

    let ids: BTreeSet<&ApplicationId> = session.windows.iter().map(|w| &w.id).collect();
    prop_assert_eq!(ids.len(), session.windows.len(), "duplicate window ids");

    let ranks: BTreeSet<u64> = session.windows.iter().map(|w| w.z_rank).collect();
    prop_assert_eq!(ranks.len(), session.windows.len(), "duplicate z ranks");

    for window in &session.windows {
        prop_assert!(window.z_rank <= session.z_order.current());
        if window.is_fullscreen {
            prop_assert_eq!(window.position, viewport.workspace_origin());
            prop_assert_eq!(window.size, viewport.workspace_size());
            continue;
        }

        prop_assert!(window.position.x >= -EPSILON);
        prop_assert!(window.position.y >= viewport.top_bar_height - EPSILON);
        prop_assert!(window.position.x + window.size.width <= viewport.width + EPSILON);
        prop_assert!(window.position.y + window.size.height <= viewport.height + EPSILON);

        let base_aspect = window.base_size.width / window.base_size.height;
        let aspect = window.size.width / window.size.height;
        prop_assert!(
            (aspect - base_aspect).abs() < 1e-3,
            "{} aspect drifted to {}",
            window.id,
            aspect
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn session_invariants_hold_for_any_command_stream(
        steps in proptest::collection::vec(step(), 1..60),
    ) {
        let mut wm = manager();
        let mut last_rank: BTreeMap<ApplicationId, u64> = BTreeMap::new();

        for step in &steps {
            apply(&mut wm, step);
            assert_invariants(&wm)?;

            for window in &wm.session().windows {
                if let Some(previous) = last_rank.get(&window.id) {
                    prop_assert!(window.z_rank >= *previous, "rank of {} decreased", window.id);
                }
            }
            last_rank = wm
                .session()
                .windows
                .iter()
                .map(|w| (w.id.clone(), w.z_rank))
                .collect();

            if let Step::Launch(index) | Step::Focus(index) = step {
                let target = app(*index);
                let visible = wm
                    .session()
                    .window(&target)
                    .is_some_and(|w| !w.is_minimized);
                if visible {
                    let rank = wm.session().window(&target).map(|w| w.z_rank);
                    let others_max = wm
                        .session()
                        .windows
                        .iter()
                        .filter(|w| w.id != target)
                        .map(|w| w.z_rank)
                        .max();
                    prop_assert!(others_max < rank, "{} is not frontmost", target);
                    prop_assert_eq!(wm.focused_window(), Some(&target));
                }
            }
        }
    }

    #[test]
    fn fullscreen_round_trip_restores_geometry(
        x in -500.0..1500.0f64,
        y in -500.0..1500.0f64,
    ) {
        let mut wm = manager();
        let browser = app(1);
        apply(&mut wm, &Step::Launch(1));
        apply(&mut wm, &Step::Drag(1, x, y));
        let before = wm.session().window(&browser).cloned().expect("browser open");

        wm.dispatch(DesktopAction::ToggleFullScreen { window_id: browser.clone() });
        wm.dispatch(DesktopAction::ToggleFullScreen { window_id: browser.clone() });

        let after = wm.session().window(&browser).expect("browser open");
        prop_assert_eq!(after.position, before.position);
        prop_assert_eq!(after.size, before.size);
        prop_assert!(!after.is_fullscreen);
    }

    #[test]
    fn close_is_idempotent(steps in proptest::collection::vec(step(), 0..20), index in 0..APP_IDS.len()) {
        let mut wm = manager();
        for step in &steps {
            apply(&mut wm, step);
        }
        let window_id = app(index);
        wm.dispatch(DesktopAction::Close { window_id: window_id.clone() });
        let once = wm.session().clone();

        let effects = wm.dispatch(DesktopAction::Close { window_id: window_id.clone() });
        prop_assert!(effects.is_empty());
        prop_assert_eq!(wm.session(), &once);
        prop_assert!(!wm.is_open(&window_id));
    }
}
