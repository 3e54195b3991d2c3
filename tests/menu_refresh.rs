use hone_menubar::{MenuBarOptions, MenuBarView, SyntheticHost, ViewRect};

fn host_with_sizes(sizes: &[(f64, f64)]) -> SyntheticHost {
    let mut host = SyntheticHost::new(800.0);
    host.wrapper = ViewRect::new(0.0, 10.0, 600.0, 750.0);
    host.menu = ViewRect::new(0.0, 10.0, 600.0, 30.0);
    for &size in sizes {
        host.content_sizes.push_back(size);
    }
    host
}

#[test]
fn height_high_water_survives_shrinking_content() {
    let _ = env_logger::builder().is_test(true).try_init();

    let host = host_with_sizes(&[(400.0, 22.0), (400.0, 34.0), (400.0, 26.0), (400.0, 30.0)]);
    let mut view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
    let expected = [34.0, 34.0, 34.0];

    assert_eq!(view.host().applied_styles().min_height, Some(22.0));
    for min in expected {
        view.update(None).unwrap();
        assert_eq!(view.host().applied_styles().min_height, Some(min));
    }
    assert_eq!(view.host().rebuilds, 4);
}

#[test]
fn width_change_restarts_height_tracking() {
    let _ = env_logger::builder().is_test(true).try_init();

    let host = host_with_sizes(&[(400.0, 30.0), (520.0, 18.0), (520.0, 26.0)]);
    let mut view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
    assert_eq!(view.host().applied_styles().min_height, Some(30.0));

    // Reflowed to a new width: the old maximum no longer applies.
    view.update(None).unwrap();
    assert_eq!(view.host().applied_styles().min_height, Some(18.0));

    view.update(None).unwrap();
    assert_eq!(view.host().applied_styles().min_height, Some(26.0));
    assert_eq!(view.max_observed_height(), 26.0);
    assert_eq!(view.width_at_max_height(), 520.0);
}

#[test]
fn remeasure_resumes_after_redock() {
    let _ = env_logger::builder().is_test(true).try_init();

    let host = host_with_sizes(&[(400.0, 20.0), (400.0, 80.0), (400.0, 28.0)]);
    let mut view = MenuBarView::new(
        host,
        MenuBarOptions {
            floating_menu: true,
        },
    )
    .unwrap();
    assert_eq!(view.host().applied_styles().min_height, Some(20.0));

    view.host_mut().wrapper.top = -50.0;
    view.evaluate_float();
    assert!(view.is_floating());

    // Refresh while floating leaves the height bookkeeping untouched even
    // though the rendered content got taller.
    view.update(None).unwrap();
    assert_eq!(view.host().applied_styles().min_height, Some(20.0));
    assert_eq!(view.max_observed_height(), 20.0);

    view.host_mut().wrapper.top = 10.0;
    view.evaluate_float();
    assert!(!view.is_floating());

    // Docked again: measurement picks the mark back up.
    view.update(None).unwrap();
    assert_eq!(view.host().applied_styles().min_height, Some(28.0));
}

#[test]
fn enabling_float_takes_effect_on_next_evaluation() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut host = host_with_sizes(&[(400.0, 20.0), (400.0, 20.0)]);
    host.wrapper.top = -50.0;
    host.menu.top = -50.0;

    let mut view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
    assert!(!view.is_floating());

    // The update itself only refreshes content; float evaluation waits for
    // the next scroll or explicit request.
    view.update(Some(MenuBarOptions {
        floating_menu: true,
    }))
    .unwrap();
    assert!(!view.is_floating());

    view.evaluate_float();
    assert!(view.is_floating());
}
