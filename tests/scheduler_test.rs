use colfit::{fit_columns, FitScheduler};

mod common;

use common::{name_qty_snapshot, people_snapshot, scenario_config};

#[test]
fn test_burst_of_resizes_equals_single_final_resize() {
    let snapshot = name_qty_snapshot();

    let mut noisy = FitScheduler::new(scenario_config(300.0));
    noisy.data_changed(&snapshot);
    for width in [310.0, 320.0, 330.0, 340.0, 350.0, 512.0] {
        noisy.viewport_resized(width);
    }
    let noisy_widths = noisy.frame_tick(&snapshot).cloned();

    let mut quiet = FitScheduler::new(scenario_config(300.0));
    quiet.data_changed(&snapshot);
    quiet.viewport_resized(512.0);
    let quiet_widths = quiet.frame_tick(&snapshot).cloned();

    assert_eq!(noisy_widths, quiet_widths);
    assert_eq!(noisy.stats.num_resize_recomputes, 1);
    assert_eq!(quiet.stats.num_resize_recomputes, 1);
    assert_eq!(noisy.stats.num_resize_signals, 6);
}

#[test]
fn test_switching_tables_recomputes_for_new_columns() {
    let mut scheduler = FitScheduler::new(scenario_config(800.0));

    let first = scheduler.data_changed(&name_qty_snapshot()).clone();
    assert_eq!(first.len(), 2);

    // New dictionary selection: five columns now, recomputed immediately.
    let second = scheduler.data_changed(&people_snapshot()).clone();
    assert_eq!(second.len(), 5);
    assert_eq!(
        &second,
        &fit_columns(&people_snapshot(), &scenario_config(800.0))
    );
    assert_eq!(scheduler.stats.num_data_recomputes, 2);
}

#[test]
fn test_tick_reads_latest_snapshot_state() {
    // A resize scheduled against one table is executed against whatever the
    // table holds at tick time; the stale request is superseded, not queued.
    let mut scheduler = FitScheduler::new(scenario_config(300.0));
    scheduler.data_changed(&name_qty_snapshot());
    scheduler.viewport_resized(600.0);

    let recomputed = scheduler.frame_tick(&people_snapshot()).cloned();
    assert_eq!(
        recomputed.as_ref(),
        Some(&fit_columns(&people_snapshot(), &scenario_config(600.0)))
    );
}

#[test]
fn test_mixed_signal_sequence_counters() {
    let snapshot = people_snapshot();
    let mut scheduler = FitScheduler::new(scenario_config(640.0));

    scheduler.data_changed(&snapshot);
    scheduler.viewport_resized(700.0);
    scheduler.viewport_resized(720.0);
    assert!(scheduler.frame_tick(&snapshot).is_some());
    assert!(scheduler.frame_tick(&snapshot).is_none());
    scheduler.data_changed(&snapshot);

    assert_eq!(scheduler.stats.num_data_recomputes, 2);
    assert_eq!(scheduler.stats.num_resize_signals, 2);
    assert_eq!(scheduler.stats.num_resize_recomputes, 1);
    assert_eq!(scheduler.stats.num_frames, 2);
}
